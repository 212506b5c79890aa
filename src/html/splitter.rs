//! Paragraph-boundary splitting of sanitized markup

use once_cell::sync::Lazy;
use regex::Regex;

use crate::render::RenderNode;

/// Opening (`<p>`, `<p style="…">`) or closing (`</p>`) paragraph tag
static PARAGRAPH_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?p(?:\s[^>]*)?>").expect("paragraph pattern is valid"));

/// Split already-sanitized markup into paragraph-aware render nodes
///
/// Each opening paragraph boundary emits one paragraph-break node; closing
/// boundaries are no-ops (a break is a single node, not a pair). Any
/// non-empty fragment between boundaries becomes one inline markup node,
/// rendered verbatim. Whitespace-only fragments are dropped.
///
/// Pure function: re-invoking on the same input is the way to restart the
/// sequence, which is safe and cheap.
pub fn split_blocks(sanitized: &str) -> Vec<RenderNode> {
    let mut nodes = Vec::new();
    let mut last = 0;

    for tag in PARAGRAPH_TAG.find_iter(sanitized) {
        push_fragment(&mut nodes, &sanitized[last..tag.start()]);
        if !tag.as_str().starts_with("</") {
            nodes.push(RenderNode::ParagraphBreak);
        }
        last = tag.end();
    }
    push_fragment(&mut nodes, &sanitized[last..]);

    nodes
}

fn push_fragment(nodes: &mut Vec<RenderNode>, fragment: &str) {
    if !fragment.trim().is_empty() {
        nodes.push(RenderNode::Markup {
            html: fragment.to_string(),
        });
    }
}
