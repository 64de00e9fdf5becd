use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("summarization model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load summarization model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("summary generation failed: {reason}")]
    GenerationFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid summary length: min_len {min_len} exceeds max_len {max_len}")]
    InvalidLength { max_len: usize, min_len: usize },

    #[error("invalid summarizer configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for SummarizeError {
    fn from(err: candle_core::Error) -> Self {
        SummarizeError::GenerationFailed {
            reason: err.to_string(),
        }
    }
}
