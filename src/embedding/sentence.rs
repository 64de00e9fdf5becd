use candle_core::{Device, Tensor};
use tracing::{debug, info, warn};

use crate::embedding::Embedder;
use crate::embedding::bert::BertSentenceModel;
use crate::embedding::config::EmbedderConfig;
use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::utils::load_tokenizer_with_truncation;
use crate::hashing::feature_slot;
use crate::scoring::l2_normalize;
use crate::text::tokenize;

enum EmbedderBackend {
    Model {
        model: Box<BertSentenceModel>,
        tokenizer: Box<tokenizers::Tokenizer>,
        device: Device,
    },
    Stub,
}

/// Sentence embedder for passages and queries (supports stub mode).
///
/// The stub backend hashes each non-stop-word token into a signed bucket and
/// L2-normalizes the counts. It is deterministic and gives texts that share
/// vocabulary a positive cosine similarity.
pub struct SentenceEmbedder {
    backend: EmbedderBackend,
    config: EmbedderConfig,
    embedding_dim: usize,
}

impl std::fmt::Debug for SentenceEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EmbedderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEmbedder {
    pub fn load(config: EmbedderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let Some(model_dir) = config.model_dir.clone() else {
            warn!(
                embedding_dim = config.embedding_dim,
                "Embedder running in STUB mode (hashed bag-of-words)"
            );
            return Ok(Self::stub_with(config));
        };

        let device = select_device();
        debug!(?device, "Selected compute device for embedder");

        let model = BertSentenceModel::load(&model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load sentence model: {}", e),
            }
        })?;

        let tokenizer =
            load_tokenizer_with_truncation(&model_dir, config.max_seq_len).map_err(|e| {
                EmbeddingError::TokenizationFailed {
                    reason: format!("Failed to load tokenizer: {}", e),
                }
            })?;

        let embedding_dim = model.hidden_size();

        info!(
            model_dir = %model_dir.display(),
            embedding_dim,
            max_seq_len = config.max_seq_len,
            "Sentence embedding model loaded"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                model: Box::new(model),
                tokenizer: Box::new(tokenizer),
                device,
            },
            config,
            embedding_dim,
        })
    }

    /// Stub embedder with the default dimension.
    pub fn stub() -> Self {
        Self::stub_with(EmbedderConfig::stub())
    }

    fn stub_with(config: EmbedderConfig) -> Self {
        let embedding_dim = config.embedding_dim;
        Self {
            backend: EmbedderBackend::Stub,
            config,
            embedding_dim,
        }
    }

    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub)
    }

    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &BertSentenceModel,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        if encoding.get_ids().is_empty() {
            return Ok(vec![0.0; self.embedding_dim]);
        }

        debug!(
            text_len = text.len(),
            token_count = encoding.get_ids().len(),
            "Generating embedding"
        );

        let input_ids = Tensor::new(encoding.get_ids(), device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        let pooled = model
            .forward(&input_ids, &type_ids, &attention_mask)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Sentence model forward pass failed: {}", e),
            })?;

        let mut embedding = pooled.squeeze(0)?.to_vec1::<f32>()?;
        l2_normalize(&mut embedding);
        Ok(embedding)
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        let mut embedding = vec![0.0f32; self.embedding_dim];

        for token in tokenize(text) {
            let (index, sign) = feature_slot(&token, self.embedding_dim);
            embedding[index] += sign;
        }

        l2_normalize(&mut embedding);
        embedding
    }
}

impl Embedder for SentenceEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EmbedderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_with_model(text, model, tokenizer, device),
            EmbedderBackend::Stub => Ok(self.embed_stub(text)),
        }
    }

    fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }
}
