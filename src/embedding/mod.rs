//! Text embedding collaborators.
//!
//! The relevance engine only needs vectors it can take a dot product and norm
//! of; [`Embedder`] is the seam. [`SentenceEmbedder`] provides a BERT-family
//! model backend and a deterministic stub.

/// BERT encoder with mean pooling.
pub mod bert;
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
mod sentence;
/// Tokenizer loading helpers.
pub mod utils;


pub use config::EmbedderConfig;
pub use error::EmbeddingError;
pub use sentence::SentenceEmbedder;

/// Maps text to a fixed-length vector.
///
/// Implementations must be deterministic within a run and always return
/// vectors of [`embedding_dim`](Embedder::embedding_dim) elements.
pub trait Embedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    fn embedding_dim(&self) -> usize;
}
