//! Segment planner
//!
//! Produces the ordered, gap-free, overlap-free segment sequence for one
//! lesson from a snapshot of its annotation set.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::annotations::{Annotation, AnnotationKind};
use crate::index;

use super::types::Segment;

/// Candidate segment with its tie-break keys
struct Candidate {
    segment: Segment,
    created_at: DateTime<Utc>,
    seq: u64,
    kind: AnnotationKind,
}

/// Plan the segment timeline for one lesson
///
/// For every annotation, every literal occurrence of its text becomes a
/// candidate segment, tagged original when it matches the captured span.
/// Candidates are sorted by start, ties broken by creation order (earlier
/// annotations win overlap conflicts), then swept left to right: a
/// candidate starting before the cursor overlaps an already-placed segment
/// and is dropped, gaps are filled with plain segments, and the tail after
/// the last candidate becomes a final plain segment.
///
/// Annotations whose text no longer occurs in the content contribute zero
/// segments; the content may have been edited since they were captured.
pub fn plan(content: &str, annotations: &[Annotation]) -> Vec<Segment> {
    let mut candidates: Vec<Candidate> = Vec::new();

    for annotation in annotations {
        for occurrence in index::find_all(content, &annotation.text) {
            // find_all only yields in-bounds ranges; the clamp guards
            // against content shorter than a buggy caller's ranges
            let start = occurrence.start.min(content.len());
            let end = occurrence.end.min(content.len());
            if start >= end {
                continue;
            }
            candidates.push(Candidate {
                segment: Segment::annotated(
                    start,
                    end,
                    &annotation.id,
                    annotation.kind,
                    annotation.is_original(occurrence),
                ),
                created_at: annotation.created_at,
                seq: annotation.seq,
                kind: annotation.kind,
            });
        }
    }

    candidates.sort_by(|a, b| {
        (a.segment.start, a.created_at, a.seq, a.kind)
            .cmp(&(b.segment.start, b.created_at, b.seq, b.kind))
    });

    let mut segments = Vec::with_capacity(candidates.len() * 2 + 1);
    let mut pos = 0;
    let mut dropped = 0;

    for candidate in candidates {
        let segment = candidate.segment;
        if segment.start < pos {
            // Overlaps an already-placed segment; first-placed wins
            dropped += 1;
            continue;
        }
        if segment.start > pos {
            segments.push(Segment::plain(pos, segment.start));
        }
        pos = segment.end;
        segments.push(segment);
    }

    if pos < content.len() {
        segments.push(Segment::plain(pos, content.len()));
    }

    debug!(
        annotations = annotations.len(),
        segments = segments.len(),
        dropped,
        "segment plan built"
    );

    segments
}
