//! Text chunks and per-chunk annotation instances

use super::serde_helpers::serialize_option_as_null;
use super::span::Span;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::VecDeque;

/// A span instantiated on one chunk
///
/// Every chunk of a span carries the same `depth`, `z_index`, `style` and
/// `label`; only the open sides and the first-token flag vary per chunk.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenAnnotation {
    /// Nesting offset within the shape family, `None` when opted out
    #[serde(serialize_with = "serialize_option_as_null", default)]
    pub depth: Option<i32>,

    /// Draw order across all shapes, `None` when opted out
    #[serde(serialize_with = "serialize_option_as_null", default)]
    pub z_index: Option<u32>,

    /// The span continues in a previous chunk
    pub openleft: bool,

    /// The span continues in a following chunk
    pub openright: bool,

    pub label: Option<String>,

    pub is_first_token_of_span: bool,

    pub style: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<bool>,

    #[serde(default)]
    pub mouse_selected: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl TokenAnnotation {
    /// Instantiate `span` on the chunk `[chunk_begin, chunk_end)`
    pub fn for_chunk(
        span: &Span,
        chunk_begin: usize,
        chunk_end: usize,
        depth: Option<i32>,
        z_index: Option<u32>,
    ) -> Self {
        Self {
            depth,
            z_index,
            openleft: chunk_begin != span.begin,
            openright: chunk_end != span.end,
            label: span.label.clone(),
            is_first_token_of_span: chunk_begin == span.begin,
            style: span.style.clone(),
            id: span.id.clone(),
            selected: span.selected,
            highlighted: span.highlighted,
            mouse_selected: span.mouse_selected,
            text: span.text.clone(),
            attributes: span.attributes.clone(),
        }
    }
}

/// A maximal range of text with no span boundary strictly inside it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextChunk {
    pub begin: usize,
    pub end: usize,

    /// Label of the last processed span starting exactly at `begin`
    pub label: Option<String>,

    /// Most recently processed span first
    #[serde(rename = "token_annotations")]
    pub token_annotations: VecDeque<TokenAnnotation>,

    pub tokens: Vec<String>,
}

impl TextChunk {
    pub fn new(begin: usize, end: usize, tokens: Vec<String>) -> Self {
        Self {
            begin,
            end,
            label: None,
            token_annotations: VecDeque::new(),
            tokens,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}
