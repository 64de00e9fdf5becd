//! Sift library crate (used by the `sift` binary and integration tests).
//!
//! Given a bundle of documents, a persona and a job-to-be-done, sift finds the
//! most relevant passages and summarizes them.
//!
//! # Modules
//!
//! ## Relevance engine
//! - [`text`] - tokenization and stop words
//! - [`segment`] - page to (heading, body) sections
//! - [`boost`] - static keyword buckets and corpus-learned dynamic terms
//! - [`scoring`] - multi-factor scoring, stable ranking, top-K
//! - [`corpus`] - candidate-set assembly and embedding
//!
//! ## Collaborators
//! - [`extract`] - document files to page text
//! - [`embedding`] - sentence embeddings (BERT or stub)
//! - [`summarize`] - abstractive summaries (T5 or extractive stub)
//! - [`output`] - result JSON
//!
//! ## Orchestration
//! - [`pipeline`] - input bundle loading and the end-to-end run
//! - [`config`] - `SIFT_*` environment configuration

pub mod boost;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod embedding;
pub mod extract;
pub mod hashing;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod segment;
pub mod summarize;
pub mod text;

pub use boost::{BoostEngine, KeywordTable, KeywordTableError};
pub use config::{Config, ConfigError};
pub use constants::{DimValidationError, validate_embedding_dim};
pub use corpus::{CorpusAggregator, CorpusError, Document, Passage};
pub use embedding::{Embedder, EmbedderConfig, EmbeddingError, SentenceEmbedder};
pub use extract::{DocumentLoader, ExtractError, LoadReport, PageExtractor, load_documents};
pub use output::{OutputDocument, OutputError, write_output};
pub use pipeline::{Pipeline, PipelineError, PipelineInput, build_query};
pub use scoring::{RankedResult, Ranker, ScoreBreakdown, ScoringError, ScoringWeights};
pub use segment::{BlankLineSegmenter, Section, Segmenter, detect_heading};
pub use summarize::{SummarizeError, Summarizer, SummarizerConfig, TextSummarizer};
