//! Multi-factor passage scoring and ranking.
//!
//! ```text
//! score = 0.55 × cosine(query, passage)
//!       + 0.20 × boost
//!       + 0.05 × 1/sqrt(max(1, words))
//!       − 0.25 if heading is "Untitled Section" or "Conclusion"
//!       − 0.05 × (earlier passages of the same document)
//! ```
//!
//! Ranking runs in two phases. Phase one walks the candidate set in its
//! original order (documents, then pages, then sections) and computes every
//! component; the diversity term comes from a per-document counter threaded
//! through that walk. Phase two stable-sorts by total score, cuts to top-K and
//! assigns dense 1-based ranks.
//!
//! The diversity counter is order-dependent state. Do not parallelize phase one.

pub mod error;
pub mod ranker;
pub mod similarity;
pub mod types;


pub use error::ScoringError;
pub use ranker::{Ranker, brevity, is_penalized_heading};
pub use similarity::{cosine_similarity, l2_normalize};
pub use types::{RankedResult, ScoreBreakdown, ScoringWeights};
