//! Render assembly
//!
//! Turns a lesson plus an annotation snapshot into the final ordered
//! sequence of render nodes, and optionally serializes that sequence to
//! HTML for the presentation layer.

mod assembler;
mod html;
mod types;

pub use assembler::render;
pub use html::{to_html, RenderConfig};
pub use types::{ColorFamily, Emphasis, RenderNode, Treatment};
