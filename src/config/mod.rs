//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `SIFT_*` environment variables;
//! command-line flags override both.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_DYNAMIC_TERMS, DEFAULT_SUMMARY_MAX_LEN, DEFAULT_SUMMARY_MIN_LEN, DEFAULT_TOP_K,
};
use crate::embedding::EmbedderConfig;
use crate::summarize::SummarizerConfig;

/// Pipeline configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SIFT_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Sentence embedding model directory. `None` runs the stub embedder.
    pub embedder_path: Option<PathBuf>,

    /// T5 summarization model directory. `None` runs the extractive stub.
    pub summarizer_path: Option<PathBuf>,

    /// JSON keyword table replacing the built-in travel buckets.
    pub keywords_path: Option<PathBuf>,

    /// Number of passages kept after ranking. Default: `10`.
    pub top_k: usize,

    /// Size of the corpus-learned term set. Default: `15`.
    pub dynamic_terms: usize,

    /// Default: `64`.
    pub summary_max_len: usize,

    /// Default: `20`.
    pub summary_min_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embedder_path: None,
            summarizer_path: None,
            keywords_path: None,
            top_k: DEFAULT_TOP_K,
            dynamic_terms: DEFAULT_DYNAMIC_TERMS,
            summary_max_len: DEFAULT_SUMMARY_MAX_LEN,
            summary_min_len: DEFAULT_SUMMARY_MIN_LEN,
        }
    }
}

impl Config {
    const ENV_EMBEDDER_PATH: &'static str = "SIFT_EMBEDDER_PATH";
    const ENV_SUMMARIZER_PATH: &'static str = "SIFT_SUMMARIZER_PATH";
    const ENV_KEYWORDS_PATH: &'static str = "SIFT_KEYWORDS_PATH";
    const ENV_TOP_K: &'static str = "SIFT_TOP_K";
    const ENV_DYNAMIC_TERMS: &'static str = "SIFT_DYNAMIC_TERMS";
    const ENV_SUMMARY_MAX_LEN: &'static str = "SIFT_SUMMARY_MAX_LEN";
    const ENV_SUMMARY_MIN_LEN: &'static str = "SIFT_SUMMARY_MIN_LEN";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            embedder_path: Self::parse_optional_path_from_env(Self::ENV_EMBEDDER_PATH),
            summarizer_path: Self::parse_optional_path_from_env(Self::ENV_SUMMARIZER_PATH),
            keywords_path: Self::parse_optional_path_from_env(Self::ENV_KEYWORDS_PATH),
            top_k: Self::parse_top_k_from_env(defaults.top_k)?,
            dynamic_terms: Self::parse_usize_from_env(
                Self::ENV_DYNAMIC_TERMS,
                defaults.dynamic_terms,
            )?,
            summary_max_len: Self::parse_usize_from_env(
                Self::ENV_SUMMARY_MAX_LEN,
                defaults.summary_max_len,
            )?,
            summary_min_len: Self::parse_usize_from_env(
                Self::ENV_SUMMARY_MIN_LEN,
                defaults.summary_min_len,
            )?,
        })
    }

    /// Validates paths and basic invariants (does not load any model).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.embedder_path {
            Self::require_dir(path)?;
        }

        if let Some(ref path) = self.summarizer_path {
            Self::require_dir(path)?;
        }

        if let Some(ref path) = self.keywords_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if self.summary_max_len == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_SUMMARY_MAX_LEN,
            });
        }

        if self.summary_min_len > self.summary_max_len {
            return Err(ConfigError::InvalidSummaryLength {
                max_len: self.summary_max_len,
                min_len: self.summary_min_len,
            });
        }

        Ok(())
    }

    pub fn embedder_config(&self) -> EmbedderConfig {
        match self.embedder_path {
            Some(ref path) => EmbedderConfig::new(path.clone()),
            None => EmbedderConfig::stub(),
        }
    }

    pub fn summarizer_config(&self) -> SummarizerConfig {
        match self.summarizer_path {
            Some(ref path) => SummarizerConfig::new(path.clone()),
            None => SummarizerConfig::stub(),
        }
    }

    fn require_dir(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// Negative values mean "keep nothing" and clamp to 0.
    fn parse_top_k_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_TOP_K) {
            Ok(value) => {
                let top_k: i64 =
                    value
                        .trim()
                        .parse()
                        .map_err(|source| ConfigError::InvalidNumber {
                            name: Self::ENV_TOP_K,
                            value: value.clone(),
                            source,
                        })?;
                Ok(usize::try_from(top_k).unwrap_or(0))
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }
}
