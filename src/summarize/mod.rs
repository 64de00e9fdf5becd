//! Short summaries of ranked passages.
//!
//! [`TextSummarizer`] runs a T5 model when one is configured and otherwise
//! falls back to an extractive lead (the first `max_len` words).

mod config;
mod error;
mod t5;

#[cfg(test)]
mod tests;

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::embedding::device::select_device;

pub use config::SummarizerConfig;
pub use error::SummarizeError;
pub use t5::{NO_REPEAT_NGRAM, T5Generator, TASK_PREFIX, argmax, banned_ngram_tokens};

/// Produces a short summary of a passage body.
///
/// `max_len` and `min_len` are in model tokens for abstractive backends and in
/// words for extractive ones.
pub trait Summarizer {
    fn summarize(&self, text: &str, max_len: usize, min_len: usize) -> Result<String, SummarizeError>;
}

enum SummarizerBackend {
    T5(Box<T5Generator>),
    Lead,
}

pub struct TextSummarizer {
    backend: SummarizerBackend,
    config: SummarizerConfig,
}

impl std::fmt::Debug for TextSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextSummarizer")
            .field(
                "backend",
                &match &self.backend {
                    SummarizerBackend::T5(generator) => format!("T5({:?})", generator.device()),
                    SummarizerBackend::Lead => "Lead".to_string(),
                },
            )
            .field("max_input_tokens", &self.config.max_input_tokens)
            .finish()
    }
}

impl TextSummarizer {
    pub fn load(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        config.validate()?;

        let Some(model_dir) = config.model_dir.clone() else {
            warn!("Summarizer running in STUB mode (extractive lead)");
            return Ok(Self::stub_with(config));
        };

        let start = Instant::now();
        let device = select_device();
        let generator = T5Generator::load(&model_dir, config.max_input_tokens, device)?;

        info!(
            model_dir = %model_dir.display(),
            max_input_tokens = config.max_input_tokens,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Summarization model loaded"
        );

        Ok(Self {
            backend: SummarizerBackend::T5(Box::new(generator)),
            config,
        })
    }

    pub fn stub() -> Self {
        Self::stub_with(SummarizerConfig::stub())
    }

    fn stub_with(config: SummarizerConfig) -> Self {
        Self {
            backend: SummarizerBackend::Lead,
            config,
        }
    }

    pub fn is_stub(&self) -> bool {
        matches!(self.backend, SummarizerBackend::Lead)
    }
}

impl Summarizer for TextSummarizer {
    fn summarize(&self, text: &str, max_len: usize, min_len: usize) -> Result<String, SummarizeError> {
        if min_len > max_len {
            return Err(SummarizeError::InvalidLength { max_len, min_len });
        }

        let summary = match &self.backend {
            SummarizerBackend::T5(generator) => generator.generate(text, max_len, min_len)?,
            SummarizerBackend::Lead => lead(text, max_len),
        };

        debug!(
            text_len = text.len(),
            summary_len = summary.len(),
            "Passage summarized"
        );

        Ok(summary)
    }
}

/// First `max_words` whitespace-separated words of `text`, single-spaced.
pub fn lead(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}
