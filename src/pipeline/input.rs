use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::pipeline::error::PipelineError;

pub const DOCS_DIR: &str = "docs";
pub const PERSONA_FILE: &str = "persona.json";
pub const JOB_FILE: &str = "job.json";

/// Stem appended to every query so generic travel vocabulary always counts.
pub const QUERY_STEM: &str =
    "cities coast cuisine nightlife packing history activities tips sights guide";

/// An input bundle: `docs/`, `persona.json` and `job.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineInput {
    pub docs_dir: PathBuf,
    /// File names under `docs_dir`, sorted.
    pub files: Vec<String>,
    /// The persona as given (`persona` key of `persona.json`).
    pub persona: Value,
    /// The job as given (`job_to_be_done`, else the first value of `job.json`).
    pub job: Value,
}

impl PipelineInput {
    pub fn load(input_dir: &Path) -> Result<Self, PipelineError> {
        let docs_dir = input_dir.join(DOCS_DIR);
        let files = list_documents(&docs_dir)?;

        let persona_root = read_json(&input_dir.join(PERSONA_FILE))?;
        let persona = select_persona(&persona_root).ok_or(PipelineError::MissingField {
            file: PERSONA_FILE,
            field: "persona",
        })?;

        let job_root = read_json(&input_dir.join(JOB_FILE))?;
        let job = select_job(&job_root).ok_or(PipelineError::MissingField {
            file: JOB_FILE,
            field: "job_to_be_done",
        })?;

        Ok(Self {
            docs_dir,
            files,
            persona,
            job,
        })
    }

    pub fn query(&self) -> String {
        build_query(
            &value_text(&self.persona, "role"),
            &value_text(&self.job, "task"),
        )
    }
}

/// `"{persona} {job} {stem}"`.
pub fn build_query(persona: &str, job: &str) -> String {
    format!("{} {} {}", persona, job, QUERY_STEM)
}

/// Sorted names of the regular files in `docs_dir`.
pub fn list_documents(docs_dir: &Path) -> Result<Vec<String>, PipelineError> {
    if !docs_dir.is_dir() {
        return Err(PipelineError::InputNotFound {
            path: docs_dir.to_path_buf(),
        });
    }

    let read_err = |source: std::io::Error| PipelineError::ReadInput {
        path: docs_dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(docs_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.file_type().map_err(read_err)?.is_file() {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    files.sort();

    Ok(files)
}

fn read_json(path: &Path) -> Result<Value, PipelineError> {
    if !path.is_file() {
        return Err(PipelineError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| PipelineError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| PipelineError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// `persona` of an object, or a bare string.
pub fn select_persona(root: &Value) -> Option<Value> {
    match root {
        Value::Object(map) => map.get("persona").filter(|v| is_truthy(v)).cloned(),
        Value::String(s) if !s.is_empty() => Some(root.clone()),
        _ => None,
    }
}

/// `job_to_be_done` when set, otherwise the first value of the object.
pub fn select_job(root: &Value) -> Option<Value> {
    match root {
        Value::Object(map) => map
            .get("job_to_be_done")
            .filter(|v| is_truthy(v))
            .or_else(|| map.values().next())
            .cloned(),
        Value::String(s) if !s.is_empty() => Some(root.clone()),
        _ => None,
    }
}

/// Text form of a persona or job value: strings as-is, objects via `key`.
pub fn value_text(value: &Value, key: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get(key) {
            Some(Value::String(s)) => s.clone(),
            _ => value.to_string(),
        },
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
