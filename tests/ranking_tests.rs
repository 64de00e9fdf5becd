//! Relevance engine tests through the public API.

mod common;

use common::fixtures::{CITY_PAGE, GENERIC_PAGE, document, passage};
use sift::boost::{BoostEngine, BucketClass, KeywordBucket, KeywordTable};
use sift::corpus::CorpusAggregator;
use sift::segment::BlankLineSegmenter;
use sift::embedding::{Embedder, SentenceEmbedder};
use sift::pipeline::build_query;
use sift::scoring::{Ranker, ScoringError};

#[test]
fn test_gather_then_rank() {
    let docs = vec![
        document(
            "cities.txt",
            &[
                CITY_PAGE,
                "Coastal Adventures\n\nBeach days, sea kayaking and yacht trips along the coast.",
            ],
        ),
        document("misc.txt", &[GENERIC_PAGE, "Conclusion\n\nEnjoy the coast."]),
    ];

    let embedder = SentenceEmbedder::stub();
    let passages = CorpusAggregator::new(BlankLineSegmenter)
        .gather(&docs, &embedder)
        .expect("gather");
    assert_eq!(passages.len(), 4);

    let query = embedder
        .embed(&build_query("Travel Planner", "Plan a coastal trip"))
        .expect("embed");
    let ranked = Ranker::default().rank(&query, passages, 10).expect("rank");

    assert_eq!(ranked.len(), 4);
    let ranks: Vec<usize> = ranked.iter().map(|r| r.importance_rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    let penalized: Vec<&str> = ranked[2..].iter().map(|r| r.passage.heading.as_str()).collect();
    assert!(penalized.contains(&"Conclusion"));
    assert!(penalized.contains(&"Untitled Section"));
}

#[test]
fn test_diversity_penalty_per_document() {
    let passages = vec![
        passage("a.pdf", 1, "Alpha Section", "same words here", vec![1.0, 0.0]),
        passage("a.pdf", 2, "Alpha Section", "same words here", vec![1.0, 0.0]),
        passage("b.pdf", 1, "Alpha Section", "same words here", vec![1.0, 0.0]),
        passage("a.pdf", 3, "Alpha Section", "same words here", vec![1.0, 0.0]),
    ];

    let ranked = Ranker::default()
        .rank(&[1.0, 0.0], passages, 10)
        .expect("rank");

    let order: Vec<(&str, u32)> = ranked
        .iter()
        .map(|r| (r.passage.document.as_str(), r.passage.page_number))
        .collect();
    assert_eq!(order, vec![("a.pdf", 1), ("b.pdf", 1), ("a.pdf", 2), ("a.pdf", 3)]);

    let penalties: Vec<f32> = ranked.iter().map(|r| r.breakdown.diversity_penalty).collect();
    assert_eq!(penalties[0], 0.0);
    assert_eq!(penalties[1], 0.0);
    assert!((penalties[2] + 0.05).abs() < 1e-6);
    assert!((penalties[3] + 0.10).abs() < 1e-6);
}

#[test]
fn test_custom_table_changes_boosts() {
    let bodies = ["A tasting at the vineyard.", "Beach and sea."];

    let travel = BoostEngine::default().compute_boosts(&bodies);
    let wine = BoostEngine::new(
        KeywordTable::new(vec![KeywordBucket::new(
            "wine",
            BucketClass::High,
            ["vineyard", "tasting"],
        )]),
        15,
    )
    .compute_boosts(&bodies);

    assert!(wine[0] > travel[0]);
    assert!(wine[1] < travel[1]);
}

#[test]
fn test_dimension_mismatch_is_an_error() {
    let passages = vec![passage("a.pdf", 1, "Alpha Section", "text", vec![1.0, 0.0, 0.0])];
    let err = Ranker::default()
        .rank(&[1.0, 0.0], passages, 10)
        .unwrap_err();

    assert_eq!(
        err,
        ScoringError::DimensionMismatch {
            index: 0,
            document: "a.pdf".to_string(),
            expected: 2,
            actual: 3,
        }
    );
}
