use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    /// A passage vector does not have the query's dimension.
    ///
    /// This is a caller error: every vector in a run must come from the same
    /// embedder.
    #[error(
        "passage {index} ({document}) has embedding dimension {actual}, query has {expected}"
    )]
    DimensionMismatch {
        index: usize,
        document: String,
        expected: usize,
        actual: usize,
    },
}
