//! Error types for text buffer operations
//!
//! Every fallible operation reports through [`TextError`]. Failures never
//! leave a buffer half-rewritten: patterns are compiled before the value is
//! touched and file writes do not mutate the buffer at all.

use thiserror::Error;

/// Top-level error type
#[derive(Debug, Error)]
pub enum TextError {
    /// A caller-supplied regular expression failed to compile
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Writing the buffer to a destination failed
    #[error("failed to write {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialized data could not be decoded
    #[error("cannot decode serialized text: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
