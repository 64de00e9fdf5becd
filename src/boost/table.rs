use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::KeywordTableError;
use crate::constants::{HIGH_BUCKET_WEIGHT, MEDIUM_BUCKET_WEIGHT};
use crate::text::tokenize;

/// Weight class of a keyword bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketClass {
    High,
    Medium,
}

impl BucketClass {
    /// Raw score contributed when a passage hits a bucket of this class.
    pub fn weight(self) -> f32 {
        match self {
            BucketClass::High => HIGH_BUCKET_WEIGHT,
            BucketClass::Medium => MEDIUM_BUCKET_WEIGHT,
        }
    }
}

/// A named theme vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordBucket {
    pub name: String,
    pub class: BucketClass,
    pub terms: HashSet<String>,
}

impl KeywordBucket {
    pub fn new<I, S>(name: &str, class: BucketClass, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.to_string(),
            class,
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Returns `true` if any of `tokens` is in this bucket.
    pub fn matches(&self, tokens: &HashSet<String>) -> bool {
        !self.terms.is_disjoint(tokens)
    }
}

/// Static keyword buckets used by the boost engine.
///
/// The default table is a travel taxonomy. Other corpora can supply their own
/// table as JSON:
///
/// ```json
/// { "buckets": [ { "name": "wine", "class": "high", "terms": ["vineyard", "tasting"] } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordTable {
    pub buckets: Vec<KeywordBucket>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::travel()
    }
}

impl KeywordTable {
    pub fn new(buckets: Vec<KeywordBucket>) -> Self {
        Self { buckets }
    }

    /// The built-in travel vocabulary (4 high-value and 3 medium-value buckets).
    pub fn travel() -> Self {
        use BucketClass::{High, Medium};

        Self::new(vec![
            KeywordBucket::new(
                "cities",
                High,
                ["city", "cities", "nice", "marseille", "cannes", "monaco"],
            ),
            KeywordBucket::new(
                "coast",
                High,
                ["coast", "beach", "coastal", "sea", "yacht", "water"],
            ),
            KeywordBucket::new(
                "cuisine",
                High,
                ["cuisine", "culinary", "food", "restaurant", "wine"],
            ),
            KeywordBucket::new(
                "nightlife",
                High,
                ["nightlife", "bar", "club", "entertainment"],
            ),
            KeywordBucket::new(
                "packing",
                Medium,
                ["packing", "luggage", "checklist", "toiletries"],
            ),
            KeywordBucket::new(
                "activities",
                Medium,
                ["hiking", "biking", "snorkel", "diving", "sports"],
            ),
            KeywordBucket::new(
                "history",
                Medium,
                ["history", "heritage", "museum", "roman", "ancient"],
            ),
        ])
    }

    /// Parses and validates a table from JSON text.
    pub fn from_json(json: &str) -> Result<Self, KeywordTableError> {
        let raw: KeywordTable = serde_json::from_str(json)?;
        let table = Self::new(
            raw.buckets
                .into_iter()
                .map(|b| KeywordBucket::new(b.name.trim(), b.class, b.terms))
                .collect(),
        );
        table.validate()?;
        Ok(table)
    }

    /// Loads a table from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, KeywordTableError> {
        let content = std::fs::read_to_string(path).map_err(|source| KeywordTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), KeywordTableError> {
        for bucket in &self.buckets {
            if bucket.name.is_empty() {
                return Err(KeywordTableError::UnnamedBucket);
            }
            if bucket.terms.iter().all(|t| t.is_empty()) {
                return Err(KeywordTableError::EmptyBucket {
                    name: bucket.name.clone(),
                });
            }
            if let Some(term) = bucket
                .terms
                .iter()
                .filter(|t| !t.is_empty())
                .find(|t| !is_single_token(t))
            {
                return Err(KeywordTableError::UnmatchableTerm {
                    bucket: bucket.name.clone(),
                    term: term.clone(),
                });
            }
        }
        Ok(())
    }

    /// Highest raw score a passage can reach (every bucket hit).
    pub fn max_score(&self) -> f32 {
        self.buckets.iter().map(|b| b.class.weight()).sum()
    }

    /// Names of the buckets matched by `tokens`, in table order.
    pub fn matched_buckets<'a>(&'a self, tokens: &HashSet<String>) -> Vec<&'a str> {
        self.buckets
            .iter()
            .filter(|b| b.matches(tokens))
            .map(|b| b.name.as_str())
            .collect()
    }
}

/// Terms only match if tokenization yields exactly that term.
fn is_single_token(term: &str) -> bool {
    matches!(tokenize(term).as_slice(), [token] if token == term)
}
