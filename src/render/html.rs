//! HTML serialization of a render plan
//!
//! The node sequence is the engine's real output; this serializer is for
//! presentation layers that consume plain HTML. Annotated literal text is
//! escaped; markup nodes were sanitized upstream and are emitted verbatim.

use html_escape::encode_text;

use crate::lesson::Lesson;

use super::types::RenderNode;

/// Configuration for HTML output
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// CSS class prefix for annotated spans
    pub class_prefix: String,
    /// Data attribute carrying the annotation id
    pub id_attribute: String,
    /// Data attribute carrying the annotation kind
    pub kind_attribute: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            class_prefix: "pl-annotation".to_string(),
            id_attribute: "data-annotation-id".to_string(),
            kind_attribute: "data-annotation-kind".to_string(),
        }
    }
}

/// Serialize a render plan to an HTML string
///
/// Annotated spans become `<span>` elements classed by kind, emphasis and
/// color family; paragraph breaks become empty paragraph elements the
/// stylesheet turns into spacing. The wrapper carries `dir="rtl"` when the
/// lesson content is in a right-to-left script.
pub fn to_html(lesson: &Lesson, nodes: &[RenderNode], config: &RenderConfig) -> String {
    let mut out = String::new();

    if lesson.is_rtl() {
        out.push_str("<div dir=\"rtl\">");
    } else {
        out.push_str("<div>");
    }

    for node in nodes {
        match node {
            RenderNode::ParagraphBreak => {
                out.push_str("<p></p>");
            }
            RenderNode::Markup { html } => {
                out.push_str(html);
            }
            RenderNode::Annotated {
                text,
                annotation_id,
                kind,
                treatment,
            } => {
                out.push_str(&format!(
                    "<span class=\"{prefix} {prefix}-{kind} {prefix}-{emphasis} {prefix}-{color}\" {id_attr}=\"{id}\" {kind_attr}=\"{kind}\">{text}</span>",
                    prefix = config.class_prefix,
                    kind = kind.as_str(),
                    emphasis = treatment.emphasis.as_str(),
                    color = treatment.color.as_str(),
                    id_attr = config.id_attribute,
                    id = annotation_id,
                    kind_attr = config.kind_attribute,
                    text = encode_text(text),
                ));
            }
        }
    }

    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::{AnnotationKind, WordStore};
    use crate::render;

    #[test]
    fn test_plain_lesson_to_html() {
        let lesson = Lesson::new("l1", "Hello", "<p>Hello world</p>");
        let nodes = render::render(&lesson, &[]).unwrap();

        let html = to_html(&lesson, &nodes, &RenderConfig::default());

        assert_eq!(html, "<div><p></p>Hello world</div>");
    }

    #[test]
    fn test_annotated_span_markup() {
        let lesson = Lesson::new("l1", "Cats", "The cat sat on the cat mat.");
        let mut store = WordStore::new();
        let annotation = store
            .add_annotation(&lesson, "cat", AnnotationKind::NewWord)
            .unwrap();
        let nodes = render::render(&lesson, &store.list_for_lesson("l1")).unwrap();

        let html = to_html(&lesson, &nodes, &RenderConfig::default());

        assert!(html.contains("pl-annotation-new-word"));
        assert!(html.contains("pl-annotation-highlight"));
        assert!(html.contains("pl-annotation-underline"));
        assert!(html.contains(&format!("data-annotation-id=\"{}\"", annotation.id)));
        assert!(html.contains("data-annotation-kind=\"new-word\""));
    }

    #[test]
    fn test_annotated_text_is_escaped() {
        let lesson = Lesson::new("l1", "Odd", "a <b> c");
        let mut store = WordStore::new();
        store
            .add_annotation(&lesson, "<b>", AnnotationKind::Sentence)
            .unwrap();
        let nodes = render::render(&lesson, &store.list_for_lesson("l1")).unwrap();

        let html = to_html(&lesson, &nodes, &RenderConfig::default());

        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_rtl_wrapper() {
        let lesson = Lesson::new("l1", "Arabic", "القطة جلست");
        let nodes = render::render(&lesson, &[]).unwrap();

        let html = to_html(&lesson, &nodes, &RenderConfig::default());

        assert!(html.starts_with("<div dir=\"rtl\">"));
    }

    #[test]
    fn test_custom_config() {
        let lesson = Lesson::new("l1", "Cats", "the cat");
        let mut store = WordStore::new();
        store
            .add_annotation(&lesson, "cat", AnnotationKind::Pronunciation)
            .unwrap();
        let nodes = render::render(&lesson, &store.list_for_lesson("l1")).unwrap();

        let config = RenderConfig {
            class_prefix: "hl".to_string(),
            id_attribute: "data-word-id".to_string(),
            kind_attribute: "data-word-kind".to_string(),
        };
        let html = to_html(&lesson, &nodes, &config);

        assert!(html.contains("class=\"hl hl-pronunciation hl-highlight hl-green\""));
        assert!(html.contains("data-word-id="));
    }
}
