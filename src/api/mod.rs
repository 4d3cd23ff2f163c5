//! WASM API
//!
//! JavaScript-facing surface of the crate. `text` exports the `Text` class
//! wrapping [`TextBuffer`](crate::TextBuffer); `helpers` holds the console
//! logging macros and JsValue conversions shared by the exports.

pub mod helpers;
pub mod text;

pub use text::JsText;
