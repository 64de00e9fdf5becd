use serde::Serialize;

/// One (heading, body) unit extracted from a page, with its embedding.
///
/// Serializes `heading` as `section_title` and `body` as `text`; the vector is
/// not serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Passage {
    pub document: String,
    /// 1-based page index within `document`.
    pub page_number: u32,
    #[serde(rename = "section_title")]
    pub heading: String,
    #[serde(rename = "text")]
    pub body: String,
    #[serde(skip)]
    pub vector: Vec<f32>,
}

impl Passage {
    pub fn new(
        document: impl Into<String>,
        page_number: u32,
        heading: impl Into<String>,
        body: impl Into<String>,
        vector: Vec<f32>,
    ) -> Self {
        Self {
            document: document.into(),
            page_number,
            heading: heading.into(),
            body: body.into(),
            vector,
        }
    }

    /// Text handed to the embedder: heading and body on separate lines.
    pub fn embedding_text(heading: &str, body: &str) -> String {
        format!("{}\n{}", heading, body).trim().to_string()
    }
}

/// Raw page texts of one successfully extracted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub pages: Vec<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }
}
