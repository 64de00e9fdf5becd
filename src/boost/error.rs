use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a keyword table.
#[derive(Debug, Error)]
pub enum KeywordTableError {
    #[error("failed to read keyword table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse keyword table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("keyword bucket '{name}' has no terms")]
    EmptyBucket { name: String },

    #[error("keyword bucket name must not be empty")]
    UnnamedBucket,

    /// A term that tokenization can never produce (several words, punctuation
    /// or a stop word), so it would never match.
    #[error("keyword bucket '{bucket}' term '{term}' is not a single non-stop-word token")]
    UnmatchableTerm { bucket: String, term: String },
}
