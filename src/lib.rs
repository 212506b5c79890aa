//! Palabras: annotated text rendering engine
//!
//! Takes a lesson's rich content plus an unordered set of user-created text
//! annotations (each naming a literal substring and a semantic kind) and
//! produces a correctly ordered, non-overlapping, markup-safe sequence of
//! render nodes, distinguishing the span an annotation was created on from
//! every other place the same text recurs, without corrupting the lesson's
//! own paragraph markup.
//!
//! The engine is synchronous and stateless: `render` is a pure function of
//! `(content, annotation snapshot)`. Mutation goes through the word store,
//! and the caller re-renders after each mutation.
//!
//! # Modules
//!
//! - `index`: literal substring search (first / all occurrences)
//! - `annotations`: annotation model and in-memory word store
//! - `lesson`: lesson content type and script-direction detection
//! - `segment`: the segment planner (ordered, gap-free, overlap-free)
//! - `html`: allow-list sanitization and paragraph-boundary splitting
//! - `render`: render assembly, treatment table, HTML serialization
//! - `cache`: LRU memoization of render plans
//!
//! # Example
//!
//! ```
//! use palabras::annotations::{AnnotationKind, WordStore};
//! use palabras::lesson::Lesson;
//! use palabras::render;
//!
//! let lesson = Lesson::new("l1", "Cats", "The cat sat on the cat mat.");
//! let mut store = WordStore::new();
//! store.add_annotation(&lesson, "cat", AnnotationKind::NewWord).unwrap();
//!
//! let nodes = render::render(&lesson, &store.list_for_lesson("l1")).unwrap();
//! assert_eq!(nodes.len(), 5);
//! ```

pub mod annotations;
pub mod cache;
pub mod error;
pub mod html;
pub mod index;
pub mod lesson;
pub mod render;
pub mod segment;

pub use annotations::{Annotation, AnnotationKind, WordStore};
pub use cache::RenderCache;
pub use error::{EngineError, Result};
pub use index::Occurrence;
pub use lesson::Lesson;
pub use render::{render, RenderConfig, RenderNode};
pub use segment::{plan, Segment, SegmentOrigin};
