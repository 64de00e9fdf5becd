use super::*;
use crate::segment::BlankLineSegmenter;
use crate::embedding::{EmbeddingError, SentenceEmbedder};

fn doc(name: &str, pages: &[&str]) -> Document {
    Document::new(name, pages.iter().map(|p| p.to_string()).collect())
}

/// Embedder that ignores text content; used to pin dimensions and failures.
struct FixedEmbedder {
    declared: usize,
    returned: usize,
    fail_on: Option<&'static str>,
}

impl Embedder for FixedEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if let Some(needle) = self.fail_on
            && text.contains(needle)
        {
            return Err(EmbeddingError::InferenceFailed {
                reason: "boom".to_string(),
            });
        }
        Ok(vec![1.0; self.returned])
    }

    fn embedding_dim(&self) -> usize {
        self.declared
    }
}

#[test]
fn test_sections_order_and_page_numbers() {
    let docs = vec![
        doc("a.pdf", &["Intro Page\n\nWelcome text.", "Second Page\n\nMore text."]),
        doc("b.pdf", &["Only Page\n\nBody."]),
    ];
    let aggregator = CorpusAggregator::new(BlankLineSegmenter);
    let sections = aggregator.sections(&docs);

    let located: Vec<(&str, u32, &str)> = sections
        .iter()
        .map(|c| (c.document, c.page_number, c.section.heading))
        .collect();
    assert_eq!(
        located,
        vec![
            ("a.pdf", 1, "Intro Page"),
            ("a.pdf", 2, "Second Page"),
            ("b.pdf", 1, "Only Page"),
        ]
    );
}

#[test]
fn test_blank_pages_produce_nothing() {
    let docs = vec![doc("a.pdf", &["", "   \n\n  ", "Real Page\n\nContent here."])];
    let aggregator = CorpusAggregator::new(BlankLineSegmenter);
    let sections = aggregator.sections(&docs);

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].page_number, 3);
}

#[test]
fn test_gather_embeds_heading_and_body() {
    let docs = vec![doc("guide.pdf", &["Coastal Walks\n\nFollow the sea path."])];
    let embedder = SentenceEmbedder::stub();
    let passages = CorpusAggregator::new(BlankLineSegmenter)
        .gather(&docs, &embedder)
        .expect("gather");

    assert_eq!(passages.len(), 1);
    let p = &passages[0];
    assert_eq!(p.document, "guide.pdf");
    assert_eq!(p.page_number, 1);
    assert_eq!(p.heading, "Coastal Walks");
    assert_eq!(p.body, "Follow the sea path.");
    assert_eq!(
        p.vector,
        embedder
            .embed("Coastal Walks\nFollow the sea path.")
            .expect("embed")
    );
}

#[test]
fn test_gather_sentinel_heading_when_no_blank_line() {
    let docs = vec![doc("notes.txt", &["just one paragraph of text"])];
    let passages = CorpusAggregator::new(BlankLineSegmenter)
        .gather(&docs, &SentenceEmbedder::stub())
        .expect("gather");

    assert_eq!(passages[0].heading, "Untitled Section");
    assert_eq!(passages[0].body, "just one paragraph of text");
}

#[test]
fn test_gather_empty_corpus() {
    let passages = CorpusAggregator::new(BlankLineSegmenter)
        .gather(&[], &SentenceEmbedder::stub())
        .expect("gather");
    assert!(passages.is_empty());
}

#[test]
fn test_gather_embedding_failure_is_fatal() {
    let docs = vec![doc("a.pdf", &["Fine Page\n\nok", "Broken Page\n\nexplode"])];
    let embedder = FixedEmbedder {
        declared: 4,
        returned: 4,
        fail_on: Some("explode"),
    };
    let err = CorpusAggregator::new(BlankLineSegmenter)
        .gather(&docs, &embedder)
        .unwrap_err();

    match err {
        CorpusError::Embedding { page_number, .. } => assert_eq!(page_number, 2),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_gather_inconsistent_dimension() {
    let docs = vec![doc("a.pdf", &["Some Page\n\nbody"])];
    let embedder = FixedEmbedder {
        declared: 8,
        returned: 4,
        fail_on: None,
    };
    let err = CorpusAggregator::new(BlankLineSegmenter)
        .gather(&docs, &embedder)
        .unwrap_err();

    assert!(matches!(
        err,
        CorpusError::InconsistentDimension {
            expected: 8,
            actual: 4,
            ..
        }
    ));
}

#[test]
fn test_embedding_text_trims() {
    assert_eq!(Passage::embedding_text("Heading", "body"), "Heading\nbody");
    assert_eq!(Passage::embedding_text("Heading", ""), "Heading");
}

#[test]
fn test_passage_serialization_renames_fields() {
    let passage = Passage::new("a.pdf", 3, "Nightlife", "Bars and clubs.", vec![0.5; 4]);
    let json = serde_json::to_value(&passage).expect("serialize");

    assert_eq!(json["document"], "a.pdf");
    assert_eq!(json["page_number"], 3);
    assert_eq!(json["section_title"], "Nightlife");
    assert_eq!(json["text"], "Bars and clubs.");
    assert!(json.get("vector").is_none());
    assert!(json.get("heading").is_none());
}
