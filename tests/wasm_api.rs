//! WASM API test
//!
//! Exercises the JavaScript-facing entry points. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use span_layout_wasm::api::{chunk_text, compute_span_layout, compute_span_layout_json};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn to_js(value: serde_json::Value) -> JsValue {
    js_sys::JSON::parse(&value.to_string()).unwrap()
}

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

fn styles() -> JsValue {
    js_sys::JSON::parse(r#"{"box":{"shape":"box"},"line":{"shape":"underline"}}"#).unwrap()
}

#[wasm_bindgen_test]
fn test_compute_span_layout() {
    let spans = to_js(serde_json::json!([
        { "begin": 0, "end": 5, "style": "box", "id": "outer" },
        { "begin": 1, "end": 3, "style": "box", "id": "inner" }
    ]));

    let result = compute_span_layout(spans, "hello", styles(), JsValue::UNDEFINED).unwrap();

    let ids = Array::from(&get(&result, "ids"));
    assert_eq!(ids.length(), 2);
    assert_eq!(ids.get(0).as_string().as_deref(), Some("outer"));

    let lines = Array::from(&get(&result, "lines"));
    assert_eq!(lines.length(), 1);

    let tokens = Array::from(&lines.get(0));
    let middle = tokens.get(1);
    assert_eq!(get(&middle, "key").as_string().as_deref(), Some("1-3"));

    let annotations = Array::from(&get(&middle, "token_annotations"));
    assert_eq!(get(&annotations.get(0), "depth").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn test_chunk_text_labels() {
    let spans = to_js(serde_json::json!([{ "begin": 0, "end": 2, "style": "line", "label": "X" }]));
    let result = chunk_text(spans, "ab cd", styles(), JsValue::NULL).unwrap();

    let chunks = Array::from(&result);
    assert_eq!(chunks.length(), 2);
    assert_eq!(get(&chunks.get(0), "label").as_string().as_deref(), Some("X"));
}

#[wasm_bindgen_test]
fn test_unknown_style_is_error() {
    let spans = to_js(serde_json::json!([{ "begin": 0, "end": 1, "style": "nope" }]));
    assert!(compute_span_layout(spans, "a", styles(), JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn test_json_entry_point() {
    let request = r#"{"spans":[],"text":"a\n","styles":{}}"#;
    let output = compute_span_layout_json(request).unwrap();
    assert!(output.contains(r#""lines":[[{"#));
    assert!(output.ends_with(r#"[]],"ids":[]}"#));
}
