//! Render node and visual treatment types

use serde::{Deserialize, Serialize};

use crate::annotations::AnnotationKind;

/// Final presentation-ready unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderNode {
    /// Paragraph boundary; one node per opening boundary, not a pair
    ParagraphBreak,
    /// Already-sanitized inline markup, rendered verbatim
    Markup { html: String },
    /// An annotated span carrying the literal text and its treatment
    #[serde(rename_all = "camelCase")]
    Annotated {
        text: String,
        annotation_id: String,
        kind: AnnotationKind,
        treatment: Treatment,
    },
}

/// Visual treatment of an annotated span
///
/// Presentation policy, kept table-driven so tests can assert on it
/// directly instead of re-deriving colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub emphasis: Emphasis,
    pub color: ColorFamily,
}

impl Treatment {
    /// Total lookup from `(kind, is_original)` to a treatment
    ///
    /// Originals get a filled highlight, recurrences an underline only.
    pub fn for_occurrence(kind: AnnotationKind, is_original: bool) -> Self {
        Self {
            emphasis: if is_original {
                Emphasis::Highlight
            } else {
                Emphasis::Underline
            },
            color: ColorFamily::for_kind(kind),
        }
    }
}

/// How an annotated span is emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// Filled background, used for the original occurrence
    Highlight,
    /// Underline only, used for recurrences
    Underline,
}

impl Emphasis {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Highlight => "highlight",
            Self::Underline => "underline",
        }
    }
}

/// Fixed color family per annotation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    Red,
    Green,
    Blue,
}

impl ColorFamily {
    /// The closed kind-to-color mapping: new words red, pronunciation
    /// notes green, sentences blue
    pub fn for_kind(kind: AnnotationKind) -> Self {
        match kind {
            AnnotationKind::NewWord => Self::Red,
            AnnotationKind::Pronunciation => Self::Green,
            AnnotationKind::Sentence => Self::Blue,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}
