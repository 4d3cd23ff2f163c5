//! Regular expression plumbing
//!
//! Callers hand patterns over either as source strings, compiled on use, or
//! as an already compiled [`Regex`]. Built-in patterns are compiled once.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TextError};

/// Default line-break pattern used by `lines()` and the indentation helpers
pub static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n").expect("valid line-break pattern"));

/// A whole-string decimal literal: optional sign, fraction and exponent,
/// surrounded by optional ASCII whitespace
pub(crate) static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[ \t\n\r\x0B\x0C]*",
        r"[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?",
        r"[ \t\n\r\x0B\x0C]*$",
    ))
    .expect("valid numeric pattern")
});

/// Entity-shaped text at the start of the input: group 1 is a name, group 2
/// a decimal and group 3 a hex character reference
pub(crate) static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&(?:([A-Za-z][A-Za-z0-9]*)|#([0-9]+)|#[xX]([0-9A-Fa-f]+));")
        .expect("valid entity pattern")
});

/// Anything usable as a regular expression argument
pub trait AsPattern {
    /// Resolve to a compiled regex, compiling if necessary
    fn to_regex(&self) -> Result<Cow<'_, Regex>>;
}

impl AsPattern for &str {
    fn to_regex(&self) -> Result<Cow<'_, Regex>> {
        compile(self).map(Cow::Owned)
    }
}

impl AsPattern for String {
    fn to_regex(&self) -> Result<Cow<'_, Regex>> {
        compile(self).map(Cow::Owned)
    }
}

impl AsPattern for &String {
    fn to_regex(&self) -> Result<Cow<'_, Regex>> {
        compile(self).map(Cow::Owned)
    }
}

impl AsPattern for Regex {
    fn to_regex(&self) -> Result<Cow<'_, Regex>> {
        Ok(Cow::Borrowed(self))
    }
}

impl AsPattern for &Regex {
    fn to_regex(&self) -> Result<Cow<'_, Regex>> {
        Ok(Cow::Borrowed(*self))
    }
}

/// Compile a pattern source, mapping failures to [`TextError::Pattern`]
pub fn compile(source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|e| {
        log::error!("rejected pattern `{}`: {}", source, e);
        TextError::Pattern {
            pattern: source.to_owned(),
            source: e,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_reports_source() {
        let err = compile("(unclosed").unwrap_err();
        match err {
            TextError::Pattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_precompiled_regex_is_borrowed() {
        let regex = Regex::new("a+").unwrap();
        let resolved = (&regex).to_regex().unwrap();
        assert!(matches!(resolved, Cow::Borrowed(_)));
    }

    #[test]
    fn test_numeric_literal_forms() {
        for ok in ["0", "13.5", "-1", "+.5", "1.", "1e10", "2.5E-3", " 42 "] {
            assert!(NUMERIC.is_match(ok), "{ok:?} should be numeric");
        }
        for bad in ["", "zero", "0x1A", "1e", ".", "--1", "1 2", "inf"] {
            assert!(!NUMERIC.is_match(bad), "{bad:?} should not be numeric");
        }
    }
}
