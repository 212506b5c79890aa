//! Markup-safe HTML processing
//!
//! Plain (unannotated) spans of lesson content may carry the lesson's own
//! block markup. This module sanitizes them against a fixed allow-list and
//! re-emits them as paragraph-aware render nodes without losing block
//! structure.
//!
//! Uses lol_html for streaming HTML processing.

mod sanitize;
mod splitter;

pub use sanitize::{sanitize, ALLOWED_ATTRIBUTES, ALLOWED_STYLE_PROPERTIES, ALLOWED_TAGS};
pub use splitter::split_blocks;
