use serde::Serialize;

use crate::constants::{
    DIVERSITY_PENALTY_STEP, HEADING_PENALTY, WEIGHT_BOOST, WEIGHT_BREVITY, WEIGHT_SIMILARITY,
};
use crate::corpus::Passage;

/// Coefficients of the ranking formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub similarity: f32,
    pub boost: f32,
    pub brevity: f32,
    /// Added (negative) when the heading is a low-information title.
    pub heading_penalty: f32,
    /// Added (negative) once per earlier passage of the same document.
    pub diversity_step: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            similarity: WEIGHT_SIMILARITY,
            boost: WEIGHT_BOOST,
            brevity: WEIGHT_BREVITY,
            heading_penalty: HEADING_PENALTY,
            diversity_step: DIVERSITY_PENALTY_STEP,
        }
    }
}

/// Per-passage score components and their weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    /// Cosine similarity to the query.
    pub similarity: f32,
    pub boost: f32,
    pub brevity: f32,
    pub heading_penalty: f32,
    pub diversity_penalty: f32,
    pub total: f32,
}

/// A passage that survived the top-K cut.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub passage: Passage,
    /// 1-based, dense.
    pub importance_rank: usize,
    pub score: f32,
    #[serde(skip)]
    pub breakdown: ScoreBreakdown,
}

impl RankedResult {
    pub fn document(&self) -> &str {
        &self.passage.document
    }

    pub fn page_number(&self) -> u32 {
        self.passage.page_number
    }

    pub fn section_title(&self) -> &str {
        &self.passage.heading
    }
}

impl std::fmt::Display for RankedResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} p.{} \"{}\" (score: {:.4})",
            self.importance_rank,
            self.document(),
            self.page_number(),
            self.section_title(),
            self.score
        )
    }
}
