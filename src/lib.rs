//! Fluent Text
//!
//! A mutable string wrapper with chainable edits: trimming, case
//! conversion, regex search and replace, splitting, line iteration and
//! indentation. The same core is exported to JavaScript through the `api`
//! module when built for WASM.

pub mod api;
pub mod error;
pub mod text;

// Re-export commonly used types
pub use error::{Result, TextError};
pub use text::{AsPattern, CharList, Needles, QuoteMode, Replacement, TextBuffer, DEFAULT_WIDTH};

use wasm_bindgen::prelude::*;

// Runs once when the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("fluent-text WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("logger was already initialized");
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
