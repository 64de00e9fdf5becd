use std::path::PathBuf;

use crate::constants::{DEFAULT_EMBED_MAX_SEQ_LEN, DEFAULT_EMBEDDING_DIM};
use crate::embedding::error::EmbeddingError;

/// Configuration for [`SentenceEmbedder`](super::SentenceEmbedder).
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedderConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    /// `None` selects the deterministic stub backend.
    pub model_dir: Option<PathBuf>,
    /// Max tokens per input (longer inputs are truncated).
    pub max_seq_len: usize,
    /// Output dimension of the stub backend. The model backend reports its own.
    pub embedding_dim: usize,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            max_seq_len: DEFAULT_EMBED_MAX_SEQ_LEN,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl EmbedderConfig {
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: Some(model_dir.into()),
            ..Default::default()
        }
    }

    /// Stub config (no model files; hashed bag-of-words embeddings).
    pub fn stub() -> Self {
        Self::default()
    }

    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    pub fn is_stub(&self) -> bool {
        self.model_dir.is_none()
    }

    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than 0".to_string(),
            });
        }

        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than 0".to_string(),
            });
        }

        if let Some(ref dir) = self.model_dir {
            if dir.as_os_str().is_empty() {
                return Err(EmbeddingError::InvalidConfig {
                    reason: "model_dir cannot be empty when provided".to_string(),
                });
            }
            if !dir.is_dir() {
                return Err(EmbeddingError::ModelNotFound { path: dir.clone() });
            }
        }

        Ok(())
    }
}
