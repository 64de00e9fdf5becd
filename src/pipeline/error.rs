use std::path::PathBuf;

use thiserror::Error;

use crate::boost::KeywordTableError;
use crate::config::ConfigError;
use crate::corpus::CorpusError;
use crate::embedding::EmbeddingError;
use crate::output::OutputError;
use crate::scoring::ScoringError;
use crate::summarize::SummarizeError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{file} has no usable '{field}' value")]
    MissingField {
        file: &'static str,
        field: &'static str,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Keywords(#[from] KeywordTableError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Summarize(#[from] SummarizeError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
