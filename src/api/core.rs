//! WASM API for the span layout engine
//!
//! JavaScript passes spans, text, the style table and an optional config; it gets
//! back `{ lines, ids }` (or the annotated chunk list) as plain objects.

use super::helpers::{deserialize, deserialize_or_default, js_error, serialize};
use crate::html_layout::{DisplayList, LayoutConfig, LayoutEngine};
use crate::models::{Span, StyleTable};
use crate::{wasm_error, wasm_info};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Compute the token lines and span order for an annotated text
///
/// # Parameters
/// - `spans_js`: array of `{begin, end, label, style, id?, mouseSelected?, ...}`
/// - `text`: the annotated text
/// - `styles_js`: object mapping style names to `{shape, autoNestingLayout, ...}`
/// - `config_js`: optional `{offsetUnit, boundsPolicy}`
///
/// # Returns
/// `{ lines: TokenData[][], ids: (string|null)[] }`
#[wasm_bindgen(js_name = computeSpanLayout)]
pub fn compute_span_layout(
    spans_js: JsValue,
    text: &str,
    styles_js: JsValue,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let spans: Vec<Span> = deserialize(spans_js, "Failed to deserialize spans")?;
    let styles: StyleTable = deserialize(styles_js, "Failed to deserialize styles")?;
    let config: LayoutConfig = deserialize_or_default(config_js, "Failed to deserialize layout config")?;

    wasm_info!("computeSpanLayout: {} spans over {} bytes", spans.len(), text.len());

    let display_list = LayoutEngine::with_config(config)
        .compute_layout(&spans, text, &styles)
        .map_err(|e| js_error(format!("Layout failed: {}", e)))?;

    serialize(&display_list, "Failed to serialize display list")
}

/// Compute the annotated chunk list (with per-chunk labels)
#[wasm_bindgen(js_name = chunkText)]
pub fn chunk_text(
    spans_js: JsValue,
    text: &str,
    styles_js: JsValue,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let spans: Vec<Span> = deserialize(spans_js, "Failed to deserialize spans")?;
    let styles: StyleTable = deserialize(styles_js, "Failed to deserialize styles")?;
    let config: LayoutConfig = deserialize_or_default(config_js, "Failed to deserialize layout config")?;

    let chunks = LayoutEngine::with_config(config)
        .compute_chunks(&spans, text, &styles)
        .map_err(|e| js_error(format!("Chunking failed: {}", e)))?;

    serialize(&chunks, "Failed to serialize chunks")
}

/// JSON request accepted by `computeSpanLayoutJson`
#[derive(Deserialize, Debug)]
pub struct LayoutRequest {
    pub spans: Vec<Span>,
    pub text: String,
    pub styles: StyleTable,
    #[serde(default)]
    pub config: LayoutConfig,
}

/// Run a layout request encoded as JSON, returning the display list as JSON
pub fn layout_json(request: &str) -> Result<String, String> {
    let request: LayoutRequest =
        serde_json::from_str(request).map_err(|e| format!("Invalid layout request: {}", e))?;

    let display_list: DisplayList = LayoutEngine::with_config(request.config)
        .compute_layout(&request.spans, &request.text, &request.styles)
        .map_err(|e| format!("Layout failed: {}", e))?;

    serde_json::to_string(&display_list).map_err(|e| format!("Failed to encode display list: {}", e))
}

/// JSON-string variant of `computeSpanLayout` for hosts without structured clone
#[wasm_bindgen(js_name = computeSpanLayoutJson)]
pub fn compute_span_layout_json(request: &str) -> Result<String, JsValue> {
    layout_json(request).map_err(|msg| {
        wasm_error!("{}", msg);
        js_sys::Error::new(&msg).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_layout_json_round_trip() {
        let request = json!({
            "spans": [{ "begin": 0, "end": 2, "label": "A", "style": "s1", "id": "x" }],
            "text": "ab cd",
            "styles": { "s1": { "shape": "box" } }
        });

        let output: Value = serde_json::from_str(&layout_json(&request.to_string()).unwrap()).unwrap();
        assert_eq!(output["ids"], json!(["x"]));

        let first = &output["lines"][0][0];
        assert_eq!(first["text"], json!("ab"));
        assert_eq!(first["key"], json!("0-2"));
        assert_eq!(first["token_annotations"][0]["depth"], json!(0));
        assert_eq!(first["token_annotations"][0]["zIndex"], json!(0));
        assert_eq!(first["token_annotations"][0]["text"], json!("ab"));
    }

    #[test]
    fn test_layout_json_reports_unknown_style() {
        let request = json!({
            "spans": [{ "begin": 0, "end": 1, "style": "missing" }],
            "text": "a",
            "styles": {}
        });
        let err = layout_json(&request.to_string()).unwrap_err();
        assert!(err.contains("unknown style 'missing'"));
    }
}
