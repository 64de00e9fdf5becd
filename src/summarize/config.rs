use std::path::PathBuf;

use crate::constants::DEFAULT_SUMMARIZER_MAX_INPUT;
use crate::summarize::error::SummarizeError;

/// Configuration for [`TextSummarizer`](super::TextSummarizer).
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizerConfig {
    /// Directory holding a T5 `config.json`, `model.safetensors` and
    /// `tokenizer.json`. `None` selects the extractive lead stub.
    pub model_dir: Option<PathBuf>,
    /// Encoder input is truncated to this many tokens.
    pub max_input_tokens: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            max_input_tokens: DEFAULT_SUMMARIZER_MAX_INPUT,
        }
    }
}

impl SummarizerConfig {
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: Some(model_dir.into()),
            ..Default::default()
        }
    }

    pub fn stub() -> Self {
        Self::default()
    }

    pub fn is_stub(&self) -> bool {
        self.model_dir.is_none()
    }

    pub fn validate(&self) -> Result<(), SummarizeError> {
        if self.max_input_tokens == 0 {
            return Err(SummarizeError::InvalidConfig {
                reason: "max_input_tokens must be greater than 0".to_string(),
            });
        }

        if let Some(ref dir) = self.model_dir {
            if dir.as_os_str().is_empty() {
                return Err(SummarizeError::InvalidConfig {
                    reason: "model_dir cannot be empty when provided".to_string(),
                });
            }
            if !dir.is_dir() {
                return Err(SummarizeError::ModelNotFound { path: dir.clone() });
            }
        }

        Ok(())
    }
}
