//! Text buffer implementation
//!
//! A `TextBuffer` owns one `String`. Mutators rewrite it in place and hand
//! back `&mut Self` so edits chain; queries only read it. Every position and
//! length is measured in codepoints, never bytes.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::charlist::CharList;
use super::codec;
use super::escape::{self, QuoteMode};
use super::layout;
use super::pattern::{AsPattern, LINE_BREAK, NUMERIC};
use super::replace::{self, Needles, Replacement};
use crate::error::{Result, TextError};

/// Width used by `indent`, `outdent` and `detab` when callers have no preference
pub const DEFAULT_WIDTH: usize = 4;

/// Mutable, chainable wrapper around a single string
///
/// ```
/// use fluent_text::TextBuffer;
///
/// let mut text = TextBuffer::new("  hello  ");
/// text.trim().upper().wrap_with("<p>", "</p>");
/// assert_eq!(text, "<p>HELLO</p>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextBuffer {
    text: String,
}

enum Side {
    Start,
    End,
    Both,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build a buffer from anything printable (numbers, other buffers, ...)
    pub fn from_display(value: impl fmt::Display) -> Self {
        Self {
            text: value.to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    pub fn append(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.text.push_str(text.as_ref());
        self
    }

    pub fn prepend(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.text.insert_str(0, text.as_ref());
        self
    }

    /// Surround with the same string on both sides
    pub fn wrap(&mut self, around: impl AsRef<str>) -> &mut Self {
        let around = around.as_ref();
        self.wrap_with(around, around)
    }

    pub fn wrap_with(&mut self, start: impl AsRef<str>, end: impl AsRef<str>) -> &mut Self {
        self.text.insert_str(0, start.as_ref());
        self.text.push_str(end.as_ref());
        self
    }

    pub fn lower(&mut self) -> &mut Self {
        self.text = self.text.to_lowercase();
        self
    }

    pub fn upper(&mut self) -> &mut Self {
        self.text = self.text.to_uppercase();
        self
    }

    /// Strip space, tab, CR, LF, NUL and vertical tab from both ends
    pub fn trim(&mut self) -> &mut Self {
        self.strip(&CharList::whitespace(), Side::Both)
    }

    pub fn ltrim(&mut self) -> &mut Self {
        self.strip(&CharList::whitespace(), Side::Start)
    }

    pub fn rtrim(&mut self) -> &mut Self {
        self.strip(&CharList::whitespace(), Side::End)
    }

    /// Strip the characters in `list` from both ends; see [`CharList::parse`]
    pub fn trim_chars(&mut self, list: &str) -> &mut Self {
        self.strip(&CharList::parse(list), Side::Both)
    }

    pub fn ltrim_chars(&mut self, list: &str) -> &mut Self {
        self.strip(&CharList::parse(list), Side::Start)
    }

    pub fn rtrim_chars(&mut self, list: &str) -> &mut Self {
        self.strip(&CharList::parse(list), Side::End)
    }

    fn strip(&mut self, list: &CharList, side: Side) -> &mut Self {
        if matches!(side, Side::End | Side::Both) {
            let keep = self.text.trim_end_matches(|c: char| list.contains(c)).len();
            self.text.truncate(keep);
        }
        if matches!(side, Side::Start | Side::Both) {
            let rest = self.text.trim_start_matches(|c: char| list.contains(c)).len();
            let skip = self.text.len() - rest;
            self.text.replace_range(..skip, "");
        }
        self
    }

    pub fn escape_html(&mut self, mode: QuoteMode) -> &mut Self {
        self.text = escape::escape_html(&self.text, mode);
        self
    }

    /// Regex search and replace over every match
    ///
    /// The pattern is compiled before anything is written, so an invalid
    /// pattern leaves the buffer untouched.
    pub fn replace<'r, P: AsPattern>(
        &mut self,
        pattern: P,
        replacement: impl Into<Replacement<'r>>,
    ) -> Result<&mut Self> {
        let regex = pattern.to_regex()?;
        let mut replacement = replacement.into();
        self.text = replacement.apply(&regex, &self.text);
        Ok(self)
    }

    /// Replace every match with the output of `f`
    ///
    /// `f` gets the whole match first, then each capture group.
    ///
    /// ```
    /// use fluent_text::TextBuffer;
    ///
    /// let mut text = TextBuffer::new("foobar");
    /// text.replace_with("bar", |mut m| m[0].upper().to_string()).unwrap();
    /// assert_eq!(text, "fooBAR");
    /// ```
    pub fn replace_with<P, F, R>(&mut self, pattern: P, f: F) -> Result<&mut Self>
    where
        P: AsPattern,
        F: FnMut(Vec<TextBuffer>) -> R,
        R: fmt::Display,
    {
        self.replace(pattern, Replacement::transform(f))
    }

    /// Literal (non-regex) substitution of one or several needles
    pub fn replace_string<'n>(
        &mut self,
        search: impl Into<Needles<'n>>,
        with: impl Into<Needles<'n>>,
    ) -> &mut Self {
        self.text = replace::replace_literal(&self.text, &search.into(), &with.into());
        self
    }

    pub fn indent(&mut self, width: usize) -> &mut Self {
        self.text = layout::indent(&self.text, width);
        self
    }

    pub fn outdent(&mut self, width: usize) -> &mut Self {
        self.text = layout::outdent(&self.text, width);
        self
    }

    pub fn detab(&mut self, width: usize) -> &mut Self {
        self.text = layout::detab(&self.text, width);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// True only for the zero-length string
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_numeric(&self) -> bool {
        NUMERIC.is_match(&self.text)
    }

    pub fn matches<P: AsPattern>(&self, pattern: P) -> Result<bool> {
        Ok(pattern.to_regex()?.is_match(&self.text))
    }

    /// First match as `[whole, group1, group2, ...]`, or `None`
    ///
    /// Groups that did not take part are `""`; trailing ones are dropped.
    pub fn match_groups<P: AsPattern>(&self, pattern: P) -> Result<Option<Vec<String>>> {
        let regex = pattern.to_regex()?;
        Ok(regex.captures(&self.text).map(|caps| {
            let groups: Vec<Option<&str>> = caps.iter().map(|m| m.map(|m| m.as_str())).collect();
            let taken = groups.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
            groups[..taken]
                .iter()
                .map(|g| g.unwrap_or_default().to_owned())
                .collect()
        }))
    }

    /// Number of codepoints
    pub fn length(&self) -> usize {
        self.text.chars().count()
    }

    pub fn count_lines(&self) -> usize {
        layout::split_segments(&self.text, &LINE_BREAK).len()
    }

    /// Codepoint index of the first `needle` at or after codepoint `offset`
    pub fn index_of(&self, needle: &str, offset: usize) -> Option<usize> {
        let start = self.byte_offset(offset)?;
        let found = self.text[start..].find(needle)?;
        Some(offset + self.text[start..start + found].chars().count())
    }

    fn byte_offset(&self, chars: usize) -> Option<usize> {
        self.text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.text.len()))
            .nth(chars)
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    // ------------------------------------------------------------------
    // Derived sequences
    // ------------------------------------------------------------------

    /// Split on `pattern`, keeping the delimiter's capture groups
    pub fn split<P: AsPattern>(&self, pattern: P) -> Result<Vec<TextBuffer>> {
        self.split_with(pattern, true)
    }

    /// Split on `pattern`; with `keep_delimiters`, the delimiter's capture
    /// groups follow the segment before it
    ///
    /// Unset groups come out as `""` up to the last group that took part.
    pub fn split_with<P: AsPattern>(
        &self,
        pattern: P,
        keep_delimiters: bool,
    ) -> Result<Vec<TextBuffer>> {
        let regex = pattern.to_regex()?;
        let mut pieces = Vec::new();
        let mut last = 0;

        for caps in regex.captures_iter(&self.text) {
            let Some(whole) = caps.get(0) else { continue };
            pieces.push(Self::new(&self.text[last..whole.start()]));
            if keep_delimiters {
                let groups: Vec<Option<&str>> =
                    caps.iter().skip(1).map(|m| m.map(|m| m.as_str())).collect();
                let taken = groups.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
                pieces.extend(groups[..taken].iter().map(|g| Self::new(g.unwrap_or_default())));
            }
            last = whole.end();
        }
        pieces.push(Self::new(&self.text[last..]));

        Ok(pieces)
    }

    /// Line segments, each keeping its trailing `\n` or `\r\n`
    pub fn lines(&self) -> Vec<TextBuffer> {
        Self::segments(&self.text, &LINE_BREAK)
    }

    /// Line segments ending after each match of a custom break pattern
    pub fn lines_by<P: AsPattern>(&self, pattern: P) -> Result<Vec<TextBuffer>> {
        let regex = pattern.to_regex()?;
        Ok(Self::segments(&self.text, &regex))
    }

    fn segments(text: &str, breaks: &regex::Regex) -> Vec<TextBuffer> {
        layout::split_segments(text, breaks)
            .into_iter()
            .map(Self::new)
            .collect()
    }

    /// Single codepoints, or runs of `chunk` codepoints when `chunk > 0`
    pub fn chars(&self, chunk: usize) -> Vec<TextBuffer> {
        if chunk == 0 {
            return self.text.chars().map(Self::from).collect();
        }

        let mut pieces = Vec::new();
        let mut current = String::new();
        let mut count = 0;
        for ch in self.text.chars() {
            current.push(ch);
            count += 1;
            if count == chunk {
                pieces.push(Self::new(std::mem::take(&mut current)));
                count = 0;
            }
        }
        if !current.is_empty() {
            pieces.push(Self::new(current));
        }
        pieces
    }

    /// Rewrite every line with `f(line, index)`
    ///
    /// Each line arrives as its own buffer, break included. The results are
    /// joined back in order.
    pub fn each_line<F, R>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(TextBuffer, usize) -> R,
        R: fmt::Display,
    {
        self.text = self
            .lines()
            .into_iter()
            .enumerate()
            .map(|(index, line)| f(line, index).to_string())
            .collect();
        self
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Write the raw bytes to `path`, returning the number written
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        fs::write(path, self.text.as_bytes()).map_err(|source| {
            log::error!("failed to save text to {}: {}", path.display(), source);
            TextError::Io {
                target: path.display().to_string(),
                source,
            }
        })?;
        log::debug!("saved {} bytes to {}", self.text.len(), path.display());
        Ok(self.text.len())
    }

    /// Write the raw bytes to an open stream, returning the number written
    pub fn save_to<W: Write>(&self, mut writer: W) -> Result<usize> {
        writer
            .write_all(self.text.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|source| TextError::Io {
                target: "stream".to_owned(),
                source,
            })?;
        Ok(self.text.len())
    }

    pub fn serialize(&self) -> String {
        codec::encode(&self.text)
    }

    pub fn deserialize(data: &str) -> Result<Self> {
        codec::decode(data).map(Self::new)
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// `write!` appends to the buffer
impl fmt::Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl FromStr for TextBuffer {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for TextBuffer {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&String> for TextBuffer {
    fn from(text: &String) -> Self {
        Self::new(text.as_str())
    }
}

impl From<Cow<'_, str>> for TextBuffer {
    fn from(text: Cow<'_, str>) -> Self {
        Self::new(text)
    }
}

impl From<char> for TextBuffer {
    fn from(ch: char) -> Self {
        Self::new(ch)
    }
}

impl From<TextBuffer> for String {
    fn from(buffer: TextBuffer) -> Self {
        buffer.text
    }
}

impl PartialEq<str> for TextBuffer {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for TextBuffer {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}
