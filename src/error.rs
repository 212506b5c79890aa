//! Error types for the rendering engine

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, EngineError>;

/// Engine error type
///
/// Rendering itself is total: every `(content, annotation set)` pair has a
/// defined output. Errors here come from the word-store contract (bad
/// selections, unknown ids) or from an internal HTML rewriter failure,
/// which indicates a contract violation upstream and is propagated rather
/// than masked.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Empty selection")]
    EmptySelection,

    #[error("Selection not found in lesson {0}")]
    SelectionNotFound(String),

    #[error("Annotation not found: {0}")]
    AnnotationNotFound(String),

    #[error("HTML rewrite failed: {0}")]
    Rewrite(String),
}
