//! Shared helpers for WASM API operations
//!
//! Console logging, JsValue conversions and error mapping used by the
//! exported class.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::TextError;
use crate::text::{Needles, QuoteMode};

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// A JS string or array of strings as literal needles
pub fn needles_from_js(value: JsValue, error_context: &str) -> Result<Needles<'static>, JsValue> {
    match value.as_string() {
        Some(single) => Ok(Needles::from(single)),
        None => deserialize::<Vec<String>>(value, error_context).map(Needles::from),
    }
}

/// Coerce a callback result to text the way JS string conversion would
pub fn js_to_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        text
    } else if value.is_undefined() || value.is_null() {
        String::new()
    } else {
        String::from(js_sys::Object::from(value.clone()).to_string())
    }
}

// ============================================================================
// Conversion Helpers
// ============================================================================

/// Convert quote mode number to enum (0 = both, 1 = double only, 2 = neither)
pub fn quote_mode_from_u8(mode: u8) -> QuoteMode {
    match mode {
        1 => QuoteMode::DoubleOnly,
        2 => QuoteMode::Neither,
        _ => QuoteMode::Both,
    }
}

/// Convert a crate error to a JsValue
pub fn to_js_error(err: TextError) -> JsValue {
    let msg = err.to_string();
    wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}
