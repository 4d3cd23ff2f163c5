//! Fluent text editing
//!
//! ## Modules
//!
//! - `buffer`: `TextBuffer` and its chainable operations
//! - `pattern`: regex arguments and the built-in patterns
//! - `replace`: regex replacements and literal multi-needle substitution
//! - `charlist`: trim character lists with `a..z` ranges
//! - `escape`: HTML special-character escaping
//! - `layout`: line segments, indent, outdent, tab expansion
//! - `codec`: versioned serialized form

pub mod buffer;
pub mod charlist;
pub mod codec;
pub mod escape;
mod layout;
pub mod pattern;
pub mod replace;

// Re-exports for convenience
pub use buffer::{TextBuffer, DEFAULT_WIDTH};
pub use charlist::CharList;
pub use escape::QuoteMode;
pub use pattern::AsPattern;
pub use replace::{Needles, Replacement};
