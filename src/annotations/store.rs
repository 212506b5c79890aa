//! In-memory word store
//!
//! Owns the live annotation set, scoped per lesson. The rendering engine
//! never mutates annotations; it borrows snapshots from this store for the
//! duration of one render pass. Persistence is the hosting application's
//! concern, so this store keeps everything in memory and exposes a version
//! counter for cache invalidation.

use tracing::debug;

use crate::error::{EngineError, Result};
use crate::index;
use crate::lesson::Lesson;

use super::types::{Annotation, AnnotationKind};

/// In-memory annotation store
///
/// Captures `start`/`end` through the position indexer at creation time, so
/// original-occurrence detection during planning stays consistent with how
/// the span was captured.
#[derive(Debug, Default)]
pub struct WordStore {
    annotations: Vec<Annotation>,
    next_seq: u64,
    version: u64,
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an annotation from a user selection
    ///
    /// The selection is trimmed and its first literal occurrence in the
    /// lesson content becomes the captured span. Errors if the trimmed
    /// selection is empty or does not occur in the content.
    pub fn add_annotation(
        &mut self,
        lesson: &Lesson,
        text: &str,
        kind: AnnotationKind,
    ) -> Result<Annotation> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EngineError::EmptySelection);
        }

        let captured = index::find_first(&lesson.content, text)
            .ok_or_else(|| EngineError::SelectionNotFound(lesson.id.clone()))?;

        let annotation = Annotation::new(&lesson.id, text, kind, captured, self.next_seq);
        self.next_seq += 1;
        self.version += 1;

        debug!(
            lesson_id = %lesson.id,
            kind = annotation.kind.as_str(),
            start = annotation.start,
            end = annotation.end,
            "annotation created"
        );

        self.annotations.push(annotation.clone());
        Ok(annotation)
    }

    /// Remove an annotation by id, returning it
    pub fn remove_annotation(&mut self, id: &str) -> Result<Annotation> {
        let position = self
            .annotations
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| EngineError::AnnotationNotFound(id.to_string()))?;

        let removed = self.annotations.remove(position);
        self.version += 1;

        debug!(annotation_id = %removed.id, "annotation removed");
        Ok(removed)
    }

    /// Resolve a selection back to its annotation and remove it
    ///
    /// The "clear highlight" gesture: the user re-selects annotated text and
    /// the annotation whose captured `(text, start, end)` matches is
    /// removed. Returns the removed annotation, or `None` when the selection
    /// does not correspond to an existing annotation (not an error; clearing
    /// un-annotated text is a no-op).
    pub fn remove_matching(
        &mut self,
        lesson_id: &str,
        text: &str,
        start: usize,
        end: usize,
    ) -> Option<Annotation> {
        let position = self.annotations.iter().position(|a| {
            a.lesson_id == lesson_id && a.text == text && a.start == start && a.end == end
        })?;

        let removed = self.annotations.remove(position);
        self.version += 1;
        Some(removed)
    }

    /// Snapshot of all live annotations for a lesson
    ///
    /// Ordered by `(created_at, seq)` ascending: earlier-created annotations
    /// win overlap conflicts during planning, so this order must be stable.
    pub fn list_for_lesson(&self, lesson_id: &str) -> Vec<Annotation> {
        let mut snapshot: Vec<Annotation> = self
            .annotations
            .iter()
            .filter(|a| a.lesson_id == lesson_id)
            .cloned()
            .collect();
        snapshot.sort_by(|a, b| (a.created_at, a.seq).cmp(&(b.created_at, b.seq)));
        snapshot
    }

    /// Monotonic version, bumped on every mutation
    ///
    /// Combined with a content digest this keys the render cache.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Total number of live annotations across all lessons
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
