//! Position indexer
//!
//! Literal substring search over raw lesson content. Matching is exact and
//! case-sensitive, and agnostic to markup: a search string that straddles a
//! tag boundary is treated as ordinary text.

use serde::{Deserialize, Serialize};

/// A literal match of an annotation's text within lesson content
///
/// Half-open byte range into the raw content. Occurrences are derived
/// values, recomputed on every render pass, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Occurrence {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Find the first literal occurrence of `text` in `content`
///
/// Returns `None` for empty or absent search text. Not an error condition:
/// callers treat it as "currently unrenderable".
pub fn find_first(content: &str, text: &str) -> Option<Occurrence> {
    if text.is_empty() {
        return None;
    }
    content
        .find(text)
        .map(|start| Occurrence::new(start, start + text.len()))
}

/// Find every literal occurrence of `text` in `content`, left to right
///
/// The search cursor advances by one character after each match start, so
/// overlapping repeats of a short substring inside a longer run are each
/// reported: searching `"aa"` in `"aaa"` yields `[0,2)` and `[1,3)`.
pub fn find_all(content: &str, text: &str) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    if text.is_empty() {
        return occurrences;
    }

    // Advancing by one byte would leave the cursor mid-character when the
    // search text starts with a multibyte char; step over the whole char
    let step = text.chars().next().map_or(1, char::len_utf8);

    let mut position = 0;
    while let Some(offset) = content[position..].find(text) {
        let start = position + offset;
        occurrences.push(Occurrence::new(start, start + text.len()));
        position = start + step;
    }

    occurrences
}
