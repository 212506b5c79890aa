//! Lesson content type
//!
//! The lesson store (persistence, sharing, section management) lives in the
//! hosting application; the engine only needs the immutable `id` and raw
//! rich content, plus a script-direction hint for the presentation layer.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Hebrew and Arabic blocks plus their presentation forms
static RTL_SCRIPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\u{0591}-\u{07FF}\u{FB1D}-\u{FDFD}\u{FE70}-\u{FEFC}]")
        .expect("RTL script pattern is valid")
});

/// A lesson as supplied by the external lesson store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Unique lesson id
    pub id: String,
    /// Display title
    pub title: String,
    /// Raw rich content; may contain the allow-listed block markup
    pub content: String,
}

impl Lesson {
    pub fn new(id: &str, title: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    /// Whether the content is written in a right-to-left script
    ///
    /// Presentation hint only; rendering is direction-agnostic.
    pub fn is_rtl(&self) -> bool {
        RTL_SCRIPT.is_match(&self.content)
    }
}
