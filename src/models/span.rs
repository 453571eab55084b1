//! Span and style definitions
//!
//! Spans are the immutable input of the layout engine: labeled, styled
//! half-open ranges over the text. Styles are looked up by name and decide
//! which depth family a span belongs to and whether it takes part in
//! automatic nesting at all.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Style table keyed by style name
pub type StyleTable = HashMap<String, Style>;

/// A labeled, styled half-open range `[begin, end)` over the text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub begin: usize,
    pub end: usize,

    #[serde(default)]
    pub label: Option<String>,

    /// Name of the style in the style table
    pub style: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<bool>,

    /// Span currently being dragged/selected with the mouse
    #[serde(default)]
    pub mouse_selected: bool,

    /// Literal text covered by the span (filled in by the layout engine)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Any other fields, passed through to every annotation of the span
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Span {
    /// Create a span with the given range and style name
    pub fn new(begin: usize, end: usize, style: impl Into<String>) -> Self {
        Self {
            begin,
            end,
            style: style.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn mouse_selected(mut self) -> Self {
        self.mouse_selected = true;
        self
    }

    /// Number of offsets covered by the span
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the span geometrically overlaps `[begin, end)`
    pub fn overlaps(&self, begin: usize, end: usize) -> bool {
        begin < self.end && self.begin < end
    }
}

/// Shape used to draw an annotation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Box,
    Underline,
    /// Any other renderer-specific shape; nested like a box
    #[serde(other)]
    Other,
}

/// Independent depth numberings for overlapping annotations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    /// Grows upward: depths 0, 1, 2, ...
    Box,
    /// Grows downward: depths are negative after cluster reversal
    Underline,
}

impl Shape {
    pub fn category(&self) -> ShapeCategory {
        match self {
            Shape::Underline => ShapeCategory::Underline,
            Shape::Box | Shape::Other => ShapeCategory::Box,
        }
    }
}

/// Where the renderer should place the label of a span
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Left,
    Right,
    Top,
    Bottom,
    Inline,
    Hidden,
}

fn default_true() -> bool {
    true
}

/// Visual and layout rules for a family of spans
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default)]
    pub shape: Shape,

    /// `false` opts spans of this style out of depth/z-index assignment
    #[serde(default = "default_true")]
    pub auto_nesting_layout: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_position: Option<LabelPosition>,

    /// Colors, borders, etc. Opaque to the layout engine.
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl Style {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            auto_nesting_layout: true,
            label_position: None,
            properties: Map::new(),
        }
    }

    pub fn boxed() -> Self {
        Self::new(Shape::Box)
    }

    pub fn underline() -> Self {
        Self::new(Shape::Underline)
    }

    pub fn without_nesting(mut self) -> Self {
        self.auto_nesting_layout = false;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_span_from_js_shape() {
        let span: Span = serde_json::from_value(json!({
            "begin": 2,
            "end": 7,
            "label": "PER",
            "style": "entity",
            "id": "s-1",
            "mouseSelected": false,
            "color": "red"
        }))
        .unwrap();

        assert_eq!(span.begin, 2);
        assert_eq!(span.end, 7);
        assert_eq!(span.label.as_deref(), Some("PER"));
        assert_eq!(span.id.as_deref(), Some("s-1"));
        assert!(!span.mouse_selected);
        assert_eq!(span.attributes.get("color"), Some(&json!("red")));
    }

    #[test]
    fn test_style_defaults() {
        let style: Style = serde_json::from_value(json!({ "shape": "underline" })).unwrap();
        assert_eq!(style.shape, Shape::Underline);
        assert!(style.auto_nesting_layout);

        let style: Style = serde_json::from_value(json!({
            "shape": "fullwidth",
            "autoNestingLayout": false,
            "labelPosition": "left",
            "backgroundColor": "#eee"
        }))
        .unwrap();
        assert_eq!(style.shape, Shape::Other);
        assert_eq!(style.shape.category(), ShapeCategory::Box);
        assert!(!style.auto_nesting_layout);
        assert_eq!(style.label_position, Some(LabelPosition::Left));
        assert!(style.properties.contains_key("backgroundColor"));
    }

    #[test]
    fn test_span_overlaps() {
        let span = Span::new(2, 5, "s");
        assert!(span.overlaps(0, 3));
        assert!(span.overlaps(4, 9));
        assert!(!span.overlaps(5, 6));
        assert!(!span.overlaps(0, 2));

        // A zero-width span sits on a chunk boundary, so it touches neither side
        let point = Span::new(3, 3, "s");
        assert!(!point.overlaps(0, 3));
        assert!(!point.overlaps(3, 5));
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(2, 5, "s").len(), 3);
        assert!(!Span::new(2, 5, "s").is_empty());
        assert!(Span::new(3, 3, "s").is_empty());
    }
}
