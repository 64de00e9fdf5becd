//! Word tokenization shared by boosting and dynamic-term learning.
//!
//! Tokens are Unicode word runs (`\b\w+\b`), lowercased, with a short English
//! stop-word list removed. There is no stemming.


use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Stop words dropped before counting or bucket matching.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "a", "to", "of", "in", "for", "on", "with", "is", "this", "that", "by", "at",
    "from", "an", "as", "it", "its", "be", "are", "or", "into", "your", "you", "about", "can",
    "will", "which", "more", "their", "has", "have", "had", "was", "were", "may", "not", "but",
    "if", "they", "them", "these", "those", "so", "than", "over", "such", "other", "when", "out",
    "up", "also", "all", "each", "per", "etc", "use", "using", "via",
];

static WORD_RE: OnceLock<Regex> = OnceLock::new();
static STOP_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"))
}

/// Returns `true` if `token` (already lowercased) is a stop word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_SET
        .get_or_init(|| STOP_WORDS.iter().copied().collect())
        .contains(token)
}

/// Tokenizes `text` in order of appearance (duplicates kept).
pub fn tokenize(text: &str) -> Vec<String> {
    word_re()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|token| !is_stop_word(token))
        .collect()
}

/// Tokenizes `text` into a set, for bucket intersection tests.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// Whitespace-separated word count, used by the brevity term.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
