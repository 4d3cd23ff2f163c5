//! Replacement arguments for regex and literal substitution

use std::borrow::Cow;
use std::fmt;

use regex::{Captures, Regex};

use super::buffer::TextBuffer;

/// What a regex match is replaced with
///
/// A `Literal` template may reference groups as `$1`, `${1}` or `${name}`.
/// A `Transform` is called once per match with the whole match followed by
/// each capture group, each wrapped in its own buffer.
pub enum Replacement<'a> {
    Literal(Cow<'a, str>),
    Transform(Box<dyn FnMut(Vec<TextBuffer>) -> String + 'a>),
}

impl<'a> Replacement<'a> {
    pub fn literal(template: impl Into<Cow<'a, str>>) -> Self {
        Replacement::Literal(template.into())
    }

    /// Wrap a closure; whatever it returns is rendered with `Display`
    pub fn transform<F, R>(mut f: F) -> Self
    where
        F: FnMut(Vec<TextBuffer>) -> R + 'a,
        R: fmt::Display,
    {
        Replacement::Transform(Box::new(move |groups| f(groups).to_string()))
    }

    pub(crate) fn apply(&mut self, regex: &Regex, text: &str) -> String {
        match self {
            Replacement::Literal(template) => regex.replace_all(text, &**template).into_owned(),
            Replacement::Transform(f) => regex
                .replace_all(text, |caps: &Captures<'_>| f(groups_of(caps)))
                .into_owned(),
        }
    }
}

/// Whole match plus groups; groups that did not take part become empty
fn groups_of(caps: &Captures<'_>) -> Vec<TextBuffer> {
    caps.iter()
        .map(|m| TextBuffer::new(m.map_or("", |m| m.as_str())))
        .collect()
}

impl fmt::Debug for Replacement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Literal(template) => f.debug_tuple("Literal").field(template).finish(),
            Replacement::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

impl<'a> From<&'a str> for Replacement<'a> {
    fn from(template: &'a str) -> Self {
        Replacement::Literal(Cow::Borrowed(template))
    }
}

impl<'a> From<&'a String> for Replacement<'a> {
    fn from(template: &'a String) -> Self {
        Replacement::Literal(Cow::Borrowed(template.as_str()))
    }
}

impl From<String> for Replacement<'_> {
    fn from(template: String) -> Self {
        Replacement::Literal(Cow::Owned(template))
    }
}

/// One literal value or a positional list of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Needles<'a> {
    One(Cow<'a, str>),
    Many(Vec<Cow<'a, str>>),
}

impl<'a> Needles<'a> {
    fn as_slice(&self) -> &[Cow<'a, str>] {
        match self {
            Needles::One(value) => std::slice::from_ref(value),
            Needles::Many(values) => values.as_slice(),
        }
    }

    /// Replacement paired with the needle at `index`
    fn paired(&self, index: usize) -> &str {
        match self {
            Needles::One(value) => &**value,
            Needles::Many(values) => values.get(index).map_or("", |value| &**value),
        }
    }
}

impl<'a> From<&'a str> for Needles<'a> {
    fn from(value: &'a str) -> Self {
        Needles::One(Cow::Borrowed(value))
    }
}

impl From<String> for Needles<'_> {
    fn from(value: String) -> Self {
        Needles::One(Cow::Owned(value))
    }
}

impl<'a> From<&'a [&'a str]> for Needles<'a> {
    fn from(values: &'a [&'a str]) -> Self {
        Needles::Many(values.iter().map(|v| Cow::Borrowed(*v)).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Needles<'a> {
    fn from(values: [&'a str; N]) -> Self {
        Needles::Many(values.into_iter().map(Cow::Borrowed).collect())
    }
}

impl<'a> From<Vec<&'a str>> for Needles<'a> {
    fn from(values: Vec<&'a str>) -> Self {
        Needles::Many(values.into_iter().map(Cow::Borrowed).collect())
    }
}

impl From<Vec<String>> for Needles<'_> {
    fn from(values: Vec<String>) -> Self {
        Needles::Many(values.into_iter().map(Cow::Owned).collect())
    }
}

/// Literal substitution, needle by needle, each pass over the previous result
pub(crate) fn replace_literal(text: &str, search: &Needles<'_>, replace: &Needles<'_>) -> String {
    let mut out = text.to_owned();
    for (i, needle) in search.as_slice().iter().enumerate() {
        let needle: &str = needle;
        if needle.is_empty() {
            continue;
        }
        out = out.replace(needle, replace.paired(i));
    }
    out
}
