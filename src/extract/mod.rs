//! Document file to per-page raw text.
//!
//! PDFs go through the `pdftotext` binary (poppler), which separates pages with
//! form feeds. Plain-text and Markdown files are read directly and may use form
//! feeds to mark pages too. Extraction problems are per-document: the loader
//! logs them, records a [`SkippedDocument`] and moves on.

mod error;


use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::corpus::Document;

pub use error::ExtractError;

/// Page separator emitted by `pdftotext`.
pub const PAGE_BREAK: char = '\u{c}';

const PDFTOTEXT: &str = "pdftotext";

/// Extracts the raw text of every page of one document.
pub trait PageExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError>;
}

/// Dispatches on file extension: `.pdf` via `pdftotext`, `.txt`/`.md` read directly.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    pdftotext: PathBuf,
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self {
            pdftotext: PathBuf::from(PDFTOTEXT),
        }
    }
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a specific `pdftotext` executable instead of the one on `PATH`.
    pub fn with_pdftotext<P: Into<PathBuf>>(mut self, program: P) -> Self {
        self.pdftotext = program.into();
        self
    }

    fn extract_pdf(&self, path: &Path) -> Result<String, ExtractError> {
        debug!(path = %path.display(), "Extracting PDF text using pdftotext");

        let output = Command::new(&self.pdftotext)
            .arg("-layout")
            .arg("-enc")
            .arg("UTF-8")
            .arg(path)
            .arg("-")
            .output()
            .map_err(|source| ExtractError::ToolUnavailable {
                tool: PDFTOTEXT,
                source,
            })?;

        if !output.status.success() {
            return Err(ExtractError::ToolFailed {
                tool: PDFTOTEXT,
                path: path.to_path_buf(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn read_text(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl PageExtractor for DocumentLoader {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);

        let raw = match extension.as_deref() {
            Some("pdf") => self.extract_pdf(path)?,
            Some("txt") | Some("md") => self.read_text(path)?,
            _ => {
                return Err(ExtractError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        Ok(split_pages(&raw))
    }
}

/// Normalizes line endings to `\n` and splits on form feeds.
///
/// A single trailing form feed (as `pdftotext` writes after the last page)
/// does not start a new page.
pub fn split_pages(raw: &str) -> Vec<String> {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let content = normalized.strip_suffix(PAGE_BREAK).unwrap_or(normalized.as_str());

    content.split(PAGE_BREAK).map(str::to_string).collect()
}

/// A document that could not be extracted.
#[derive(Debug)]
pub struct SkippedDocument {
    pub name: String,
    pub error: ExtractError,
}

/// Outcome of loading a batch of documents.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Successfully extracted documents, in input order.
    pub documents: Vec<Document>,
    pub skipped: Vec<SkippedDocument>,
}

impl LoadReport {
    /// Names of the successfully extracted documents.
    pub fn document_names(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.name.as_str()).collect()
    }
}

/// Extracts every file in `files` (names relative to `dir`), skipping failures.
pub fn load_documents<X, S>(dir: &Path, files: &[S], extractor: &X) -> LoadReport
where
    X: PageExtractor + ?Sized,
    S: AsRef<str>,
{
    let start = Instant::now();
    let mut report = LoadReport::default();

    for name in files {
        let name = name.as_ref();
        let path = dir.join(name);

        match extractor.extract_pages(&path) {
            Ok(pages) => {
                debug!(document = name, num_pages = pages.len(), "Document extracted");
                report.documents.push(Document::new(name, pages));
            }
            Err(error) => {
                warn!(document = name, error = %error, "Skipping document");
                report.skipped.push(SkippedDocument {
                    name: name.to_string(),
                    error,
                });
            }
        }
    }

    info!(
        loaded = report.documents.len(),
        skipped = report.skipped.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Documents loaded"
    );

    report
}
