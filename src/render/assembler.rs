//! Render assembler
//!
//! Drives the segment planner and routes each segment to its node form:
//! plain segments expand through sanitization and paragraph splitting,
//! annotated segments become one styled node.

use tracing::debug;

use crate::annotations::Annotation;
use crate::error::Result;
use crate::html;
use crate::lesson::Lesson;
use crate::segment::{self, SegmentOrigin};

use super::types::{RenderNode, Treatment};

/// Render a lesson against a snapshot of its annotation set
///
/// Pure function of `(content, annotations)`: re-running on an unchanged
/// pair yields an identical node sequence. The snapshot is read-only for
/// the duration of the call; callers re-invoke after mutating the store.
pub fn render(lesson: &Lesson, annotations: &[Annotation]) -> Result<Vec<RenderNode>> {
    let content = &lesson.content;
    let segments = segment::plan(content, annotations);

    let mut nodes = Vec::new();
    for segment in &segments {
        match &segment.origin {
            SegmentOrigin::Plain => {
                let sanitized = html::sanitize(&content[segment.start..segment.end])?;
                nodes.extend(html::split_blocks(&sanitized));
            }
            SegmentOrigin::Annotated {
                annotation_id,
                kind,
                is_original,
            } => {
                nodes.push(RenderNode::Annotated {
                    text: content[segment.start..segment.end].to_string(),
                    annotation_id: annotation_id.clone(),
                    kind: *kind,
                    treatment: Treatment::for_occurrence(*kind, *is_original),
                });
            }
        }
    }

    debug!(
        lesson_id = %lesson.id,
        segments = segments.len(),
        nodes = nodes.len(),
        "render plan assembled"
    );

    Ok(nodes)
}
