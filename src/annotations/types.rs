//! Annotation types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::index::Occurrence;

/// Semantic kind of an annotation
///
/// Sentence annotations are semantically distinct from word annotations
/// (they feed example-sentence drills rather than vocabulary tables) but
/// share the same model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationKind {
    NewWord,
    Pronunciation,
    Sentence,
}

impl AnnotationKind {
    /// Stable string form, used for CSS classes and data attributes
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewWord => "new-word",
            Self::Pronunciation => "pronunciation",
            Self::Sentence => "sentence",
        }
    }
}

/// A user-created highlight over a literal text span
///
/// Immutable after creation: a correction is modeled as delete + re-create.
/// `start`/`end` are half-open byte offsets into the lesson content *as
/// captured at creation time*; the content may change independently, so
/// `content[start..end] == text` is guaranteed only at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Unique identifier (UUID)
    pub id: String,
    /// The lesson this annotation belongs to
    pub lesson_id: String,
    /// The literal substring captured at creation time (non-empty, trimmed)
    pub text: String,
    /// Semantic kind
    pub kind: AnnotationKind,
    /// Captured start offset
    pub start: usize,
    /// Captured end offset
    pub end: usize,
    /// Creation timestamp, primary display/tie-break order
    pub created_at: DateTime<Utc>,
    /// Monotonic per-store sequence number; breaks `created_at` ties so
    /// creation order stays deterministic end to end
    pub seq: u64,
}

impl Annotation {
    /// Create a new annotation from a captured occurrence
    pub fn new(
        lesson_id: &str,
        text: &str,
        kind: AnnotationKind,
        captured: Occurrence,
        seq: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            lesson_id: lesson_id.to_string(),
            text: text.to_string(),
            kind,
            start: captured.start,
            end: captured.end,
            created_at: Utc::now(),
            seq,
        }
    }

    /// Whether `occurrence` is the span this annotation was created on
    pub fn is_original(&self, occurrence: Occurrence) -> bool {
        occurrence.start == self.start && occurrence.end == self.end
    }
}
