//! Cross-cutting, shared constants.
//!
//! Scoring weights and defaults are collected here so the ranking formula reads
//! as named terms rather than literals scattered across modules.
//!
//! # Dimension Invariants
//!
//! Every vector in a scoring run (query and passages) must share one dimension.
//! The embedder declares its dimension once; use [`validate_embedding_dim`] at module
//! boundaries to catch mismatches before they reach cosine similarity.

/// Output dimension of the stub embedder and of all-MiniLM-L6-v2.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the sentence embedder.
pub const DEFAULT_EMBED_MAX_SEQ_LEN: usize = 256;

/// Max tokens fed to the summarizer encoder.
pub const DEFAULT_SUMMARIZER_MAX_INPUT: usize = 512;

pub const DEFAULT_TOP_K: usize = 10;

/// Number of corpus-learned terms that make up the dynamic bucket.
pub const DEFAULT_DYNAMIC_TERMS: usize = 15;

pub const DEFAULT_SUMMARY_MAX_LEN: usize = 64;
pub const DEFAULT_SUMMARY_MIN_LEN: usize = 20;

/// Heading used when the first line of a page does not look like a title.
pub const SENTINEL_HEADING: &str = "Untitled Section";

pub const WEIGHT_SIMILARITY: f32 = 0.55;
pub const WEIGHT_BOOST: f32 = 0.20;
pub const WEIGHT_BREVITY: f32 = 0.05;
pub const HEADING_PENALTY: f32 = -0.25;
pub const DIVERSITY_PENALTY_STEP: f32 = -0.05;

/// Share of the final boost contributed by the static keyword buckets.
pub const STATIC_BOOST_SHARE: f32 = 0.70;
/// Share of the final boost contributed by the dynamic bucket.
pub const DYNAMIC_BOOST_SHARE: f32 = 0.30;

pub const HIGH_BUCKET_WEIGHT: f32 = 1.0;
pub const MEDIUM_BUCKET_WEIGHT: f32 = 0.4;

/// Headings (lowercased) that are penalized as low-information sections.
pub const PENALIZED_HEADINGS: [&str; 2] = ["untitled section", "conclusion"];

/// Error returned when dimension validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Embedding dimension cannot be zero.
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "embedding dimension cannot be zero"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// # Example
///
/// ```
/// use sift::constants::{validate_embedding_dim, DEFAULT_EMBEDDING_DIM};
///
/// validate_embedding_dim(384, DEFAULT_EMBEDDING_DIM).unwrap();
/// assert!(validate_embedding_dim(768, DEFAULT_EMBEDDING_DIM).is_err());
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if expected == 0 {
        return Err(DimValidationError::ZeroDimension);
    }
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_weights_sum() {
        let boost_shares = STATIC_BOOST_SHARE + DYNAMIC_BOOST_SHARE;
        assert!((boost_shares - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validate_embedding_dim_match() {
        assert!(validate_embedding_dim(384, 384).is_ok());
    }

    #[test]
    fn test_validate_embedding_dim_mismatch() {
        assert_eq!(
            validate_embedding_dim(768, 384),
            Err(DimValidationError::DimensionMismatch {
                expected: 384,
                actual: 768
            })
        );
    }

    #[test]
    fn test_validate_embedding_dim_zero() {
        assert_eq!(
            validate_embedding_dim(0, 0),
            Err(DimValidationError::ZeroDimension)
        );
    }

    #[test]
    fn test_error_display() {
        let err = DimValidationError::ZeroDimension;
        assert_eq!(err.to_string(), "embedding dimension cannot be zero");

        let err = DimValidationError::DimensionMismatch {
            expected: 384,
            actual: 768,
        };
        assert!(err.to_string().contains("384"));
        assert!(err.to_string().contains("768"));
    }
}
