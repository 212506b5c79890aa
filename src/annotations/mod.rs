//! Annotation model and per-lesson word store
//!
//! An annotation is a user-created highlight over a literal text span in a
//! lesson, carrying a semantic kind (new word, pronunciation note, example
//! sentence). The rendering engine only ever consumes read-only snapshots;
//! mutation goes through the word store, and every mutation is expected to
//! trigger a fresh render.

mod store;
mod types;

pub use store::WordStore;
pub use types::{Annotation, AnnotationKind};
