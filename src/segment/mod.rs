//! Segment planning
//!
//! Merges every occurrence of every annotation's text into a single
//! ordered, non-overlapping timeline of spans covering the whole lesson.
//! The output is ephemeral: recomputed on every render, never persisted.

mod planner;
mod types;

pub use planner::plan;
pub use types::{Segment, SegmentOrigin};
