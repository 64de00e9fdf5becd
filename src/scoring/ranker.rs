use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, info};

use crate::boost::BoostEngine;
use crate::constants::PENALIZED_HEADINGS;
use crate::corpus::Passage;
use crate::text::word_count;

use super::error::ScoringError;
use super::similarity::cosine_similarity;
use super::types::{RankedResult, ScoreBreakdown, ScoringWeights};

/// Running count of passages already scored per document.
///
/// Threaded through one ordered pass; the penalty of a passage depends on the
/// passages of the same document that came before it.
#[derive(Debug, Default)]
struct DiversityCounter<'a> {
    seen: HashMap<&'a str, u32>,
}

impl<'a> DiversityCounter<'a> {
    /// Returns how many passages of `document` were seen so far, then counts this one.
    fn observe(&mut self, document: &'a str) -> u32 {
        let count = self.seen.entry(document).or_insert(0);
        let prior = *count;
        *count += 1;
        prior
    }
}

/// Combines similarity, boosts and penalties into a ranked top-K list.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    boost_engine: BoostEngine,
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(boost_engine: BoostEngine) -> Self {
        Self {
            boost_engine,
            weights: ScoringWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn boost_engine(&self) -> &BoostEngine {
        &self.boost_engine
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Scores every passage in candidate order.
    ///
    /// Boosts are computed once over all bodies. The diversity penalty uses a
    /// per-document counter read before and incremented after each passage, so
    /// the n-th passage of a document (0-based) gets `n × diversity_step`.
    pub fn score_candidates(
        &self,
        query: &[f32],
        passages: &[Passage],
    ) -> Result<Vec<ScoreBreakdown>, ScoringError> {
        check_dimensions(query, passages)?;

        let bodies: Vec<&str> = passages.iter().map(|p| p.body.as_str()).collect();
        let boosts = self.boost_engine.compute_boosts(&bodies);

        let mut counter = DiversityCounter::default();

        let breakdowns = passages
            .iter()
            .zip(boosts)
            .map(|(passage, boost)| {
                let prior = counter.observe(&passage.document);
                self.breakdown(query, passage, boost, prior)
            })
            .collect();

        Ok(breakdowns)
    }

    /// Ranks `passages` against `query` and keeps the best `top_k`.
    ///
    /// Passages with equal totals keep their candidate-set order. An empty
    /// candidate set or `top_k == 0` yields an empty list.
    pub fn rank(
        &self,
        query: &[f32],
        passages: Vec<Passage>,
        top_k: usize,
    ) -> Result<Vec<RankedResult>, ScoringError> {
        if passages.is_empty() || top_k == 0 {
            debug!(
                num_passages = passages.len(),
                top_k, "Nothing to rank"
            );
            return Ok(vec![]);
        }

        let breakdowns = self.score_candidates(query, &passages)?;
        let num_candidates = passages.len();

        let mut scored: Vec<(ScoreBreakdown, Passage)> =
            breakdowns.into_iter().zip(passages).collect();

        // stable: ties keep candidate order
        scored.sort_by(|a, b| descending(a.0.total, b.0.total));
        scored.truncate(top_k);

        let ranked: Vec<RankedResult> = scored
            .into_iter()
            .enumerate()
            .map(|(idx, (breakdown, passage))| RankedResult {
                passage,
                importance_rank: idx + 1,
                score: breakdown.total,
                breakdown,
            })
            .collect();

        for result in &ranked {
            debug!(
                rank = result.importance_rank,
                document = %result.passage.document,
                page = result.passage.page_number,
                heading = %result.passage.heading,
                similarity = result.breakdown.similarity,
                boost = result.breakdown.boost,
                brevity = result.breakdown.brevity,
                heading_penalty = result.breakdown.heading_penalty,
                diversity_penalty = result.breakdown.diversity_penalty,
                score = result.score,
                "Ranked passage"
            );
        }

        info!(
            num_candidates,
            top_k,
            returned = ranked.len(),
            top_score = ranked.first().map(|r| r.score),
            "Ranking complete"
        );

        Ok(ranked)
    }

    fn breakdown(&self, query: &[f32], passage: &Passage, boost: f32, prior: u32) -> ScoreBreakdown {
        let similarity = cosine_similarity(query, &passage.vector);
        let brevity = brevity(&passage.body);
        let heading_penalty = if is_penalized_heading(&passage.heading) {
            self.weights.heading_penalty
        } else {
            0.0
        };
        let diversity_penalty = self.weights.diversity_step * prior as f32;

        let total = self.weights.similarity * similarity
            + self.weights.boost * boost
            + self.weights.brevity * brevity
            + heading_penalty
            + diversity_penalty;

        ScoreBreakdown {
            similarity,
            boost,
            brevity,
            heading_penalty,
            diversity_penalty,
            total,
        }
    }
}

/// `1 / sqrt(max(1, words))`: shorter passages score higher.
pub fn brevity(body: &str) -> f32 {
    1.0 / (word_count(body).max(1) as f32).sqrt()
}

/// Returns `true` for headings that carry no topical information.
pub fn is_penalized_heading(heading: &str) -> bool {
    let lowered = heading.to_lowercase();
    PENALIZED_HEADINGS.contains(&lowered.as_str())
}

fn check_dimensions(query: &[f32], passages: &[Passage]) -> Result<(), ScoringError> {
    match passages
        .iter()
        .enumerate()
        .find(|(_, p)| p.vector.len() != query.len())
    {
        Some((index, passage)) => Err(ScoringError::DimensionMismatch {
            index,
            document: passage.document.clone(),
            expected: query.len(),
            actual: passage.vector.len(),
        }),
        None => Ok(()),
    }
}

/// Descending order on scores that is total: NaN sorts last and `-0.0 == 0.0`.
fn descending(a: f32, b: f32) -> Ordering {
    sort_key(b).total_cmp(&sort_key(a))
}

fn sort_key(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else if score == 0.0 {
        0.0
    } else {
        score
    }
}
