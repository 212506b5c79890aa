//! Segment types

use serde::{Deserialize, Serialize};

use crate::annotations::AnnotationKind;

/// What a segment represents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SegmentOrigin {
    /// Unannotated content, to be sanitized and split on paragraph
    /// boundaries
    Plain,
    /// An occurrence of an annotation's text
    #[serde(rename_all = "camelCase")]
    Annotated {
        /// Owning annotation id
        annotation_id: String,
        /// Semantic kind, drives the visual treatment
        kind: AnnotationKind,
        /// True exactly for the occurrence matching the annotation's
        /// captured creation-time span
        is_original: bool,
    },
}

/// A contiguous, non-overlapping unit of the render plan
///
/// The segments for one lesson, taken in order, exactly tile
/// `[0, content.len())` with no gaps and no overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub origin: SegmentOrigin,
}

impl Segment {
    pub fn plain(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            origin: SegmentOrigin::Plain,
        }
    }

    pub fn annotated(
        start: usize,
        end: usize,
        annotation_id: &str,
        kind: AnnotationKind,
        is_original: bool,
    ) -> Self {
        Self {
            start,
            end,
            origin: SegmentOrigin::Annotated {
                annotation_id: annotation_id.to_string(),
                kind,
                is_original,
            },
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.origin, SegmentOrigin::Plain)
    }
}
