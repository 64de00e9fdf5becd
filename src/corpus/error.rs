use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to embed passage from {document} page {page_number}: {source}")]
    Embedding {
        document: String,
        page_number: u32,
        #[source]
        source: EmbeddingError,
    },

    /// The embedder returned a vector whose length differs from its declared dimension.
    #[error(
        "embedder returned {actual} dimensions for {document} page {page_number}, expected {expected}"
    )]
    InconsistentDimension {
        document: String,
        page_number: u32,
        expected: usize,
        actual: usize,
    },
}
