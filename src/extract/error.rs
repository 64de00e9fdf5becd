use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported document type: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("{tool} is not available: {source} (is poppler installed?)")]
    ToolUnavailable {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed on {path}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        path: PathBuf,
        stderr: String,
    },
}
