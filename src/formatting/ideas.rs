// src/formatting/ideas.rs
//! Splits generated text into clean content ideas.

use crate::types::{ContentIdea, GeneratedText};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("numbered marker pattern is valid"));

static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-•]\s*").expect("bullet marker pattern is valid"));

/// Strips one leading `3.` marker, then one leading `-` or `•` marker.
///
/// Operates on a single already-trimmed line.
pub fn strip_enumeration_marker(line: &str) -> &str {
    let line = match NUMBERED_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    match BULLET_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Cleans generated text into at most `limit` ideas, in generator order.
///
/// Fewer usable lines than `limit` is fine; nothing is padded.
pub fn parse_content_ideas(text: &GeneratedText, limit: usize) -> Vec<ContentIdea> {
    text.as_str()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_enumeration_marker)
        .filter(|idea| !idea.is_empty())
        .take(limit)
        .map(|idea| ContentIdea::new(idea))
        .collect()
}
