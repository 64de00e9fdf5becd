//! Candidate-set assembly.
//!
//! Walks documents in order, pages in order (1-based), and the sections the
//! [`Segmenter`] yields for each page. Sections with an empty body are dropped;
//! the rest are embedded and become [`Passage`]s. The resulting order is the
//! candidate order the ranker's diversity penalty depends on.

mod error;
mod types;

#[cfg(test)]
mod tests;

use std::time::Instant;

use tracing::{debug, info};

use crate::constants::validate_embedding_dim;
use crate::embedding::Embedder;
use crate::segment::{BlankLineSegmenter, Section, Segmenter};

pub use error::CorpusError;
pub use types::{Document, Passage};

/// A non-empty section located within the corpus, before embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub document: &'a str,
    pub page_number: u32,
    pub section: Section<'a>,
}

/// Turns extracted documents into the embedded candidate set.
#[derive(Debug, Clone, Default)]
pub struct CorpusAggregator<S: Segmenter = BlankLineSegmenter> {
    segmenter: S,
}

impl<S: Segmenter> CorpusAggregator<S> {
    pub fn new(segmenter: S) -> Self {
        Self { segmenter }
    }

    /// Non-empty sections of every page, in document, page and section order.
    pub fn sections<'a>(&'a self, documents: &'a [Document]) -> Vec<Candidate<'a>> {
        let mut candidates = Vec::new();

        for document in documents {
            for (idx, page) in document.pages.iter().enumerate() {
                let page_number = (idx + 1) as u32;
                for section in self.segmenter.segment(page) {
                    if section.is_empty() {
                        debug!(
                            document = %document.name,
                            page = page_number,
                            heading = section.heading,
                            "Skipping section with empty body"
                        );
                        continue;
                    }
                    candidates.push(Candidate {
                        document: &document.name,
                        page_number,
                        section,
                    });
                }
            }
        }

        candidates
    }

    /// Segments, filters and embeds every page of `documents`.
    ///
    /// Any embedding failure aborts the whole gather.
    pub fn gather<E: Embedder + ?Sized>(
        &self,
        documents: &[Document],
        embedder: &E,
    ) -> Result<Vec<Passage>, CorpusError> {
        let start = Instant::now();
        let expected = embedder.embedding_dim();
        let candidates = self.sections(documents);

        let mut passages = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let Section { heading, body } = candidate.section;
            let text = Passage::embedding_text(heading, body);

            let vector = embedder
                .embed(&text)
                .map_err(|source| CorpusError::Embedding {
                    document: candidate.document.to_string(),
                    page_number: candidate.page_number,
                    source,
                })?;

            validate_embedding_dim(vector.len(), expected).map_err(|_| {
                CorpusError::InconsistentDimension {
                    document: candidate.document.to_string(),
                    page_number: candidate.page_number,
                    expected,
                    actual: vector.len(),
                }
            })?;

            passages.push(Passage::new(
                candidate.document,
                candidate.page_number,
                heading,
                body,
                vector,
            ));
        }

        info!(
            num_documents = documents.len(),
            num_pages = documents.iter().map(|d| d.pages.len()).sum::<usize>(),
            num_passages = passages.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Candidate set gathered"
        );

        Ok(passages)
    }
}
