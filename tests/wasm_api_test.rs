//! JS-facing `Text` class
//!
//! Only meaningful on wasm32; run with `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use fluent_text::api::JsText;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_constructor_and_chain() {
    let mut text = JsText::new(Some("  foo ".to_owned()));
    text.trim(None);
    text.upper();
    text.wrap("<p>", Some("</p>".to_owned()));
    assert_eq!(text.text(), "<p>FOO</p>");
}

#[wasm_bindgen_test]
fn test_invalid_pattern_throws() {
    let mut text = JsText::new(Some("foo".to_owned()));
    let err = text.replace("(", "x").unwrap_err();
    // The thrown value carries the rejected pattern
    let message = err.as_string().unwrap();
    assert!(message.contains("invalid pattern `(`"), "unexpected message: {message}");
    assert_eq!(text.text(), "foo");
}

#[wasm_bindgen_test]
fn test_replace_with_callback() {
    let mut text = JsText::new(Some("foobar".to_owned()));
    let upper = js_sys::Function::new_with_args("m", "return m.toUpperCase();");
    text.replace_with("bar", &upper).unwrap();
    assert_eq!(text.text(), "fooBAR");
}

#[wasm_bindgen_test]
fn test_throwing_callback_leaves_text() {
    let mut text = JsText::new(Some("a\nb".to_owned()));
    let boom = js_sys::Function::new_with_args("line, i", "throw new Error('boom');");
    assert!(text.each_line(&boom).is_err());
    assert_eq!(text.text(), "a\nb");
}

#[wasm_bindgen_test]
fn test_replace_string_arrays() {
    let mut text = JsText::new(Some("a b c".to_owned()));
    let search = js_sys::Array::of2(&JsValue::from_str("a"), &JsValue::from_str("c"));
    text.replace_string(search.into(), JsValue::from_str("_")).unwrap();
    assert_eq!(text.text(), "_ b _");
}

#[wasm_bindgen_test]
fn test_lines_and_index_of() {
    let text = JsText::new(Some("1\n2\n3".to_owned()));
    assert_eq!(text.lines(None).unwrap().length(), 3);
    assert_eq!(text.count_lines(), 3);
    assert_eq!(text.index_of("2", None), 2);
    assert_eq!(text.index_of("x", None), -1);
}

#[wasm_bindgen_test]
fn test_serialize_round_trip() {
    let text = JsText::new(Some("héllo\0".to_owned()));
    let restored = JsText::deserialize(&text.serialize()).unwrap();
    assert_eq!(restored.text(), text.text());
}
