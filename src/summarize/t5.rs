use std::collections::HashSet;
use std::path::Path;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::t5::{Config, T5ForConditionalGeneration};
use parking_lot::Mutex;
use tokenizers::Tokenizer;
use tracing::debug;

use crate::embedding::utils::load_tokenizer_with_truncation;
use crate::summarize::error::SummarizeError;

/// Task prefix T5 was trained with for summarization.
pub const TASK_PREFIX: &str = "summarize: ";

/// N-gram size that may not repeat in a generated summary.
pub const NO_REPEAT_NGRAM: usize = 3;

/// T5 encoder-decoder with greedy decoding.
///
/// The model keeps a KV cache, so it sits behind a mutex and every call clears
/// the cache before decoding.
pub struct T5Generator {
    model: Mutex<T5ForConditionalGeneration>,
    tokenizer: Tokenizer,
    config: Config,
    device: Device,
}

impl T5Generator {
    pub fn load(model_dir: &Path, max_input_tokens: usize, device: Device) -> Result<Self, SummarizeError> {
        let config_content = std::fs::read_to_string(model_dir.join("config.json")).map_err(|e| {
            SummarizeError::ModelLoadFailed {
                reason: format!("Failed to read config.json: {}", e),
            }
        })?;
        let mut config: Config =
            serde_json::from_str(&config_content).map_err(|e| SummarizeError::ModelLoadFailed {
                reason: format!("Failed to parse config: {}", e),
            })?;
        config.use_cache = true;

        let weights_path = model_dir.join("model.safetensors");
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device).map_err(
                |e| SummarizeError::ModelLoadFailed {
                    reason: format!("Failed to map weights: {}", e),
                },
            )?
        };
        let model =
            T5ForConditionalGeneration::load(vb, &config).map_err(|e| SummarizeError::ModelLoadFailed {
                reason: format!("Failed to build T5 model: {}", e),
            })?;

        let tokenizer = load_tokenizer_with_truncation(model_dir, max_input_tokens).map_err(|e| {
            SummarizeError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;

        Ok(Self {
            model: Mutex::new(model),
            tokenizer,
            config,
            device,
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Generates a summary of at most `max_len` decoder tokens (start token
    /// included). End-of-sequence is suppressed until `min_len` is reached.
    pub fn generate(&self, text: &str, max_len: usize, min_len: usize) -> Result<String, SummarizeError> {
        let prompt = format!("{}{}", TASK_PREFIX, text.replace('\n', " "));
        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(|e| SummarizeError::TokenizationFailed {
                reason: e.to_string(),
            })?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;

        let start_token = self
            .config
            .decoder_start_token_id
            .unwrap_or(self.config.pad_token_id) as u32;
        let eos_token = self.config.eos_token_id as u32;

        let mut model = self.model.lock();
        model.clear_kv_cache();

        let encoder_output = model.encode(&input_ids)?;
        let mut output_ids: Vec<u32> = vec![start_token];

        while output_ids.len() < max_len {
            let decoder_input = if output_ids.len() == 1 || !self.config.use_cache {
                Tensor::new(output_ids.as_slice(), &self.device)?.unsqueeze(0)?
            } else {
                let last = output_ids[output_ids.len() - 1];
                Tensor::new(&[last], &self.device)?.unsqueeze(0)?
            };

            let logits = model
                .decode(&decoder_input, &encoder_output)?
                .squeeze(0)?
                .to_dtype(DType::F32)?;
            let mut logits = logits.to_vec1::<f32>()?;

            if output_ids.len() < min_len
                && let Some(eos) = logits.get_mut(eos_token as usize)
            {
                *eos = f32::NEG_INFINITY;
            }
            for banned in banned_ngram_tokens(&output_ids, NO_REPEAT_NGRAM) {
                if let Some(logit) = logits.get_mut(banned as usize) {
                    *logit = f32::NEG_INFINITY;
                }
            }

            let Some(next) = argmax(&logits) else {
                break;
            };
            if next == eos_token {
                break;
            }
            output_ids.push(next);
        }

        model.clear_kv_cache();
        drop(model);

        debug!(
            input_tokens = encoding.get_ids().len(),
            output_tokens = output_ids.len() - 1,
            "Summary generated"
        );

        self.tokenizer
            .decode(&output_ids[1..], true)
            .map(|s| s.trim().to_string())
            .map_err(|e| SummarizeError::TokenizationFailed {
                reason: e.to_string(),
            })
    }
}

/// Tokens that would complete an `n`-gram already present in `tokens`.
pub fn banned_ngram_tokens(tokens: &[u32], n: usize) -> HashSet<u32> {
    let mut banned = HashSet::new();
    if n == 0 || tokens.len() + 1 < n {
        return banned;
    }

    let prefix = &tokens[tokens.len() + 1 - n..];
    for window in tokens.windows(n) {
        if &window[..n - 1] == prefix {
            banned.insert(window[n - 1]);
        }
    }
    banned
}

/// Index of the largest finite logit.
pub fn argmax(logits: &[f32]) -> Option<u32> {
    logits
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(idx, _)| idx as u32)
}
