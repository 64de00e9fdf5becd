//! Heading-aware page segmentation.
//!
//! A page is split on its first blank line. The first line before that blank
//! line is treated as a heading candidate; everything after it is the body.
//!
//! ```text
//! - Water Sports          <- heading candidate ("Water Sports")
//!                         <- first blank line
//! Try snorkeling in ...   <- body
//! ```
//!
//! Segmentation never fails. Pages without a usable heading get
//! [`SENTINEL_HEADING`]; pages without a body yield an empty body, which the
//! corpus aggregator filters out.

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::SENTINEL_HEADING;

/// Bullet markers stripped from a heading candidate (at most one).
const BULLETS: &[char] = &['-', '–', '—', '•', '*'];

static HEADING_RE: OnceLock<Regex> = OnceLock::new();

fn heading_re() -> &'static Regex {
    HEADING_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9 &-]{3,}$").expect("heading pattern is valid"))
}

/// A (heading, body) unit borrowed from one page of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// Detected title, or [`SENTINEL_HEADING`]. Never empty.
    pub heading: &'a str,
    /// Trimmed body text. May be empty.
    pub body: &'a str,
}

impl Section<'_> {
    /// Returns `true` if the body has no non-whitespace characters.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// Splits one page of raw text into sections.
///
/// The returned iterator is lazy and `Clone`, so callers can restart it.
pub trait Segmenter {
    fn segment<'a>(&self, page_text: &'a str) -> impl Iterator<Item = Section<'a>> + Clone + 'a;
}

/// Splits on the first blank line and yields exactly one section per page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLineSegmenter;

impl Segmenter for BlankLineSegmenter {
    fn segment<'a>(&self, page_text: &'a str) -> impl Iterator<Item = Section<'a>> + Clone + 'a {
        std::iter::once(split_page(page_text))
    }
}

/// Splits a page into its single (heading, body) section.
pub fn split_page(page_text: &str) -> Section<'_> {
    let trimmed = page_text.trim();

    let (head, body) = match trimmed.split_once("\n\n") {
        Some((head, body)) => (head, body),
        None => ("", trimmed),
    };

    let first_line = head.lines().next().unwrap_or("");

    Section {
        heading: detect_heading(first_line),
        body: body.trim(),
    }
}

/// Returns the heading in `first_line`, or [`SENTINEL_HEADING`].
///
/// A heading is an optional bullet, optional whitespace, then a letter followed
/// by three or more letters, digits, spaces, `&` or `-`.
///
/// ```
/// use sift::segment::detect_heading;
///
/// assert_eq!(detect_heading("- Water Sports"), "Water Sports");
/// assert_eq!(detect_heading("Hi"), "Untitled Section");
/// assert_eq!(detect_heading(""), "Untitled Section");
/// ```
pub fn detect_heading(first_line: &str) -> &str {
    let line = first_line.trim();
    let candidate = line.strip_prefix(BULLETS).unwrap_or(line).trim_start();

    if heading_re().is_match(candidate) {
        candidate.trim_end()
    } else {
        SENTINEL_HEADING
    }
}
