//! Corpus-adaptive keyword boosting.
//!
//! Each passage gets a boost in `[0, 1]` made of two parts:
//!
//! - **static**: hits against the [`KeywordTable`] buckets, normalized by the
//!   table's maximum attainable score;
//! - **dynamic**: `1.0` if the passage shares a token with the most frequent
//!   terms of the whole candidate set, else `0.0`.
//!
//! Dynamic terms depend on every passage in the run, so boosts are computed in
//! one pass over the complete candidate set and never incrementally. The same
//! passage can receive a different boost next to different companion documents.

pub mod error;
pub mod table;


pub use error::KeywordTableError;
pub use table::{BucketClass, KeywordBucket, KeywordTable};

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::constants::{DEFAULT_DYNAMIC_TERMS, DYNAMIC_BOOST_SHARE, STATIC_BOOST_SHARE};
use crate::text::{token_set, tokenize};

/// Most frequent non-stop-word tokens of one candidate set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicTerms {
    ranked: Vec<String>,
    set: HashSet<String>,
}

impl DynamicTerms {
    /// Terms ordered by descending frequency (ties in first-seen order).
    pub fn ranked(&self) -> &[String] {
        &self.ranked
    }

    pub fn contains(&self, term: &str) -> bool {
        self.set.contains(term)
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn as_set(&self) -> &HashSet<String> {
        &self.set
    }
}

/// Learns the `top_n` most frequent tokens across `texts`.
///
/// Counts are taken over the entire candidate set, not per document. Equal
/// counts are ordered by where the token was first seen, scanning texts in
/// input order, so the result is deterministic for a fixed input order.
pub fn build_dynamic_terms<S: AsRef<str>>(texts: &[S], top_n: usize) -> DynamicTerms {
    // token -> (count, first-seen position)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut position = 0usize;

    for text in texts {
        for token in tokenize(text.as_ref()) {
            counts
                .entry(token)
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, position));
            position += 1;
        }
    }

    let mut by_frequency: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first_seen))| (token, count, first_seen))
        .collect();
    by_frequency.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    by_frequency.truncate(top_n);

    let ranked: Vec<String> = by_frequency.into_iter().map(|(token, _, _)| token).collect();
    let set = ranked.iter().cloned().collect();

    DynamicTerms { ranked, set }
}

/// Binary dynamic boost: `1.0` if `tokens` share any term with `dyn_terms`.
pub fn dynamic_boost(tokens: &HashSet<String>, dyn_terms: &DynamicTerms) -> f32 {
    if tokens.is_disjoint(dyn_terms.as_set()) {
        0.0
    } else {
        1.0
    }
}

/// Computes per-passage boosts from a keyword table plus corpus-learned terms.
#[derive(Debug, Clone)]
pub struct BoostEngine {
    table: KeywordTable,
    dynamic_top_n: usize,
}

impl Default for BoostEngine {
    fn default() -> Self {
        Self::new(KeywordTable::default(), DEFAULT_DYNAMIC_TERMS)
    }
}

impl BoostEngine {
    pub fn new(table: KeywordTable, dynamic_top_n: usize) -> Self {
        Self {
            table,
            dynamic_top_n,
        }
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    pub fn dynamic_top_n(&self) -> usize {
        self.dynamic_top_n
    }

    /// Additive bucket score normalized to `[0, 1]`.
    ///
    /// Each matched bucket contributes its class weight once, however many of
    /// its terms appear.
    pub fn static_boost(&self, tokens: &HashSet<String>) -> f32 {
        let max = self.table.max_score();
        if max <= 0.0 {
            return 0.0;
        }

        let raw = self
            .table
            .buckets
            .iter()
            .filter(|bucket| bucket.matches(tokens))
            .fold(0.0f32, |acc, bucket| acc + bucket.class.weight());

        (raw / max).clamp(0.0, 1.0)
    }

    pub fn build_dynamic_terms<S: AsRef<str>>(&self, texts: &[S]) -> DynamicTerms {
        build_dynamic_terms(texts, self.dynamic_top_n)
    }

    /// Weighted blend of the static and dynamic boosts for one passage.
    pub fn boost(&self, tokens: &HashSet<String>, dyn_terms: &DynamicTerms) -> f32 {
        STATIC_BOOST_SHARE * self.static_boost(tokens)
            + DYNAMIC_BOOST_SHARE * dynamic_boost(tokens, dyn_terms)
    }

    /// Returns one boost per text, in input order.
    ///
    /// `texts` must be the complete candidate set of the run.
    pub fn compute_boosts<S: AsRef<str>>(&self, texts: &[S]) -> Vec<f32> {
        let dyn_terms = self.build_dynamic_terms(texts);

        debug!(
            num_texts = texts.len(),
            top_n = self.dynamic_top_n(),
            dynamic_terms = ?dyn_terms.ranked(),
            "Learned dynamic terms"
        );

        texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let tokens = token_set(text.as_ref());
                let boost = self.boost(&tokens, &dyn_terms);
                debug!(
                    index,
                    matched_buckets = ?self.table.matched_buckets(&tokens),
                    boost,
                    "Passage boost"
                );
                boost
            })
            .collect()
    }
}
