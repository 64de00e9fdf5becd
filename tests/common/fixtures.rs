//! Test fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use sift::corpus::{Document, Passage};
use tempfile::TempDir;

pub const PERSONA_JSON: &str = r#"{"persona": {"role": "Travel Planner"}}"#;

pub const JOB_JSON: &str =
    r#"{"job_to_be_done": {"task": "Plan a trip of 4 days for a group of 10 college friends."}}"#;

pub const CITY_PAGE: &str = "City Exploration\n\nVisit the old town and harbor markets.";

/// Stop words only: no static bucket and no dynamic term can match it.
pub const GENERIC_PAGE: &str = "This is all that it has.";

/// An input bundle on disk: `docs/`, `persona.json`, `job.json`.
pub struct InputBundle {
    dir: TempDir,
}

impl InputBundle {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        fs::create_dir_all(dir.path().join("docs")).expect("mkdir docs");
        let bundle = Self { dir };
        bundle.persona(PERSONA_JSON).job(JOB_JSON)
    }

    pub fn persona(self, json: &str) -> Self {
        fs::write(self.dir.path().join("persona.json"), json).expect("write persona");
        self
    }

    pub fn job(self, json: &str) -> Self {
        fs::write(self.dir.path().join("job.json"), json).expect("write job");
        self
    }

    /// Adds a text document; pages are joined with form feeds.
    pub fn document(self, name: &str, pages: &[&str]) -> Self {
        fs::write(self.dir.path().join("docs").join(name), pages.join("\u{c}"))
            .expect("write document");
        self
    }

    pub fn raw_document(self, name: &str, bytes: &[u8]) -> Self {
        fs::write(self.dir.path().join("docs").join(name), bytes).expect("write document");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("out").join("result.json")
    }
}

pub fn document(name: &str, pages: &[&str]) -> Document {
    Document::new(name, pages.iter().map(|p| p.to_string()).collect())
}

/// Passage with a fixed vector, for ranking tests that bypass embedding.
pub fn passage(document: &str, page: u32, heading: &str, body: &str, vector: Vec<f32>) -> Passage {
    Passage::new(document, page, heading, body, vector)
}
