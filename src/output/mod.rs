//! Result document serialization.
//!
//! ```json
//! {
//!   "metadata": { "input_documents": [...], "persona": ..., "job_to_be_done": ...,
//!                 "processing_timestamp": "2025-07-10T09:30:00.000000+00:00" },
//!   "extracted_sections": [ { "document", "section_title", "importance_rank", "page_number" } ],
//!   "subsection_analysis": [ { "document", "refined_text", "page_number" } ]
//! }
//! ```
//!
//! `processing_timestamp` is RFC 3339 with an explicit `+00:00` offset rather
//! than a naive UTC timestamp, so consumers never have to guess the zone.


use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::scoring::RankedResult;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub input_documents: Vec<String>,
    /// Persona exactly as given in the input bundle.
    pub persona: Value,
    /// Job-to-be-done exactly as given in the input bundle.
    pub job_to_be_done: Value,
    pub processing_timestamp: String,
}

impl Metadata {
    pub fn new(input_documents: Vec<String>, persona: Value, job_to_be_done: Value) -> Self {
        Self {
            input_documents,
            persona,
            job_to_be_done,
            processing_timestamp: timestamp(Utc::now()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSection {
    pub document: String,
    pub section_title: String,
    pub importance_rank: usize,
    pub page_number: u32,
}

impl From<&RankedResult> for ExtractedSection {
    fn from(result: &RankedResult) -> Self {
        Self {
            document: result.passage.document.clone(),
            section_title: result.passage.heading.clone(),
            importance_rank: result.importance_rank,
            page_number: result.passage.page_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsectionAnalysis {
    pub document: String,
    pub refined_text: String,
    pub page_number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub metadata: Metadata,
    pub extracted_sections: Vec<ExtractedSection>,
    pub subsection_analysis: Vec<SubsectionAnalysis>,
}

impl OutputDocument {
    /// Pairs ranked results with their summaries (same order, same length).
    pub fn new(metadata: Metadata, ranked: &[RankedResult], summaries: Vec<String>) -> Self {
        let extracted_sections = ranked.iter().map(ExtractedSection::from).collect();
        let subsection_analysis = ranked
            .iter()
            .zip(summaries)
            .map(|(result, refined_text)| SubsectionAnalysis {
                document: result.passage.document.clone(),
                refined_text,
                page_number: result.passage.page_number,
            })
            .collect();

        Self {
            metadata,
            extracted_sections,
            subsection_analysis,
        }
    }
}

/// RFC 3339 UTC timestamp with microsecond precision.
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Writes `output` as pretty-printed JSON, creating parent directories.
pub fn write_output(path: &Path, output: &OutputDocument) -> Result<(), OutputError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(output)?;
    std::fs::write(path, json).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        sections = output.extracted_sections.len(),
        "Output written"
    );

    Ok(())
}
