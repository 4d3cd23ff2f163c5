//! The JS `Text` class
//!
//! Mirrors [`TextBuffer`] one method per operation. Mutators edit the
//! wrapped buffer in place; operations that take a regex throw on an
//! invalid pattern and leave the text unchanged.

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

use super::helpers::{self, js_to_text, needles_from_js, quote_mode_from_u8, to_js_error};
use crate::text::{TextBuffer, DEFAULT_WIDTH};
use crate::{wasm_log, wasm_warn};

#[wasm_bindgen(js_name = Text)]
#[derive(Debug, Clone, Default)]
pub struct JsText {
    inner: TextBuffer,
}

fn to_array(pieces: Vec<TextBuffer>) -> Array {
    pieces
        .iter()
        .map(|piece| JsValue::from_str(piece.get_text()))
        .collect()
}

#[wasm_bindgen(js_class = Text)]
impl JsText {
    #[wasm_bindgen(constructor)]
    pub fn new(text: Option<String>) -> JsText {
        JsText {
            inner: TextBuffer::new(text.unwrap_or_default()),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.inner.get_text().to_owned()
    }

    #[wasm_bindgen(setter)]
    pub fn set_text(&mut self, text: String) {
        self.inner.set_text(text);
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.text()
    }

    pub fn append(&mut self, text: &str) {
        self.inner.append(text);
    }

    pub fn prepend(&mut self, text: &str) {
        self.inner.prepend(text);
    }

    pub fn wrap(&mut self, start: &str, end: Option<String>) {
        match end {
            Some(end) => self.inner.wrap_with(start, end),
            None => self.inner.wrap(start),
        };
    }

    pub fn lower(&mut self) {
        self.inner.lower();
    }

    pub fn upper(&mut self) {
        self.inner.upper();
    }

    pub fn trim(&mut self, chars: Option<String>) {
        match chars {
            Some(list) => self.inner.trim_chars(&list),
            None => self.inner.trim(),
        };
    }

    pub fn ltrim(&mut self, chars: Option<String>) {
        match chars {
            Some(list) => self.inner.ltrim_chars(&list),
            None => self.inner.ltrim(),
        };
    }

    pub fn rtrim(&mut self, chars: Option<String>) {
        match chars {
            Some(list) => self.inner.rtrim_chars(&list),
            None => self.inner.rtrim(),
        };
    }

    /// `mode`: 0 = both quotes (default), 1 = double only, 2 = neither
    #[wasm_bindgen(js_name = escapeHtml)]
    pub fn escape_html(&mut self, mode: Option<u8>) {
        self.inner.escape_html(quote_mode_from_u8(mode.unwrap_or(0)));
    }

    pub fn replace(&mut self, pattern: &str, replacement: &str) -> Result<(), JsValue> {
        self.inner
            .replace(pattern, replacement)
            .map(|_| ())
            .map_err(to_js_error)
    }

    /// Replace every match with `callback(match, group1, ...)`
    ///
    /// Runs against a scratch copy so a throwing callback leaves the text
    /// unchanged.
    #[wasm_bindgen(js_name = replaceWith)]
    pub fn replace_with(&mut self, pattern: &str, callback: &Function) -> Result<(), JsValue> {
        let mut failure: Option<JsValue> = None;
        let mut scratch = self.inner.clone();

        scratch
            .replace_with(pattern, |groups| {
                if failure.is_some() {
                    return String::new();
                }
                match callback.apply(&JsValue::NULL, &to_array(groups)) {
                    Ok(value) => js_to_text(&value),
                    Err(err) => {
                        failure = Some(err);
                        String::new()
                    }
                }
            })
            .map_err(to_js_error)?;

        if let Some(err) = failure {
            wasm_warn!("replaceWith callback threw; text left unchanged");
            return Err(err);
        }
        self.inner = scratch;
        Ok(())
    }

    /// `search` and `replace` are each a string or an array of strings
    #[wasm_bindgen(js_name = replaceString)]
    pub fn replace_string(&mut self, search: JsValue, replace: JsValue) -> Result<(), JsValue> {
        let search = needles_from_js(search, "Invalid search value")?;
        let replace = needles_from_js(replace, "Invalid replace value")?;
        self.inner.replace_string(search, replace);
        Ok(())
    }

    pub fn indent(&mut self, width: Option<usize>) {
        self.inner.indent(width.unwrap_or(DEFAULT_WIDTH));
    }

    pub fn outdent(&mut self, width: Option<usize>) {
        self.inner.outdent(width.unwrap_or(DEFAULT_WIDTH));
    }

    pub fn detab(&mut self, width: Option<usize>) {
        self.inner.detab(width.unwrap_or(DEFAULT_WIDTH));
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[wasm_bindgen(js_name = isNumeric)]
    pub fn is_numeric(&self) -> bool {
        self.inner.is_numeric()
    }

    #[wasm_bindgen(js_name = "match")]
    pub fn is_match(&self, pattern: &str) -> Result<bool, JsValue> {
        self.inner.matches(pattern).map_err(to_js_error)
    }

    /// `[match, group1, ...]` for the first match, or `undefined`
    #[wasm_bindgen(js_name = matchGroups)]
    pub fn match_groups(&self, pattern: &str) -> Result<JsValue, JsValue> {
        let groups = self.inner.match_groups(pattern).map_err(to_js_error)?;
        helpers::serialize(&groups, "Failed to serialize match groups")
    }

    pub fn length(&self) -> usize {
        self.inner.length()
    }

    #[wasm_bindgen(js_name = countLines)]
    pub fn count_lines(&self) -> usize {
        self.inner.count_lines()
    }

    /// Codepoint index of `needle`, or -1 when absent
    #[wasm_bindgen(js_name = indexOf)]
    pub fn index_of(&self, needle: &str, offset: Option<usize>) -> i32 {
        self.inner
            .index_of(needle, offset.unwrap_or(0))
            .and_then(|index| i32::try_from(index).ok())
            .unwrap_or(-1)
    }

    pub fn split(&self, pattern: &str, keep_delimiters: Option<bool>) -> Result<Array, JsValue> {
        self.inner
            .split_with(pattern, keep_delimiters.unwrap_or(true))
            .map(to_array)
            .map_err(to_js_error)
    }

    pub fn lines(&self, pattern: Option<String>) -> Result<Array, JsValue> {
        match pattern {
            Some(pattern) => self.inner.lines_by(pattern).map(to_array).map_err(to_js_error),
            None => Ok(to_array(self.inner.lines())),
        }
    }

    pub fn chars(&self, chunk: Option<usize>) -> Array {
        to_array(self.inner.chars(chunk.unwrap_or(0)))
    }

    /// Replace each line with `callback(line, index)`
    #[wasm_bindgen(js_name = eachLine)]
    pub fn each_line(&mut self, callback: &Function) -> Result<(), JsValue> {
        let mut failure: Option<JsValue> = None;
        let mut scratch = self.inner.clone();

        scratch.each_line(|line, index| {
            if failure.is_some() {
                return line.into_string();
            }
            let index = JsValue::from_f64(index as f64);
            match callback.call2(&JsValue::NULL, &JsValue::from_str(line.get_text()), &index) {
                Ok(value) => js_to_text(&value),
                Err(err) => {
                    failure = Some(err);
                    line.into_string()
                }
            }
        });

        if let Some(err) = failure {
            wasm_warn!("eachLine callback threw; text left unchanged");
            return Err(err);
        }
        self.inner = scratch;
        Ok(())
    }

    pub fn serialize(&self) -> String {
        self.inner.serialize()
    }

    pub fn deserialize(data: &str) -> Result<JsText, JsValue> {
        let inner = TextBuffer::deserialize(data).map_err(to_js_error)?;
        wasm_log!("deserialized text of {} characters", inner.length());
        Ok(JsText { inner })
    }
}

impl From<TextBuffer> for JsText {
    fn from(inner: TextBuffer) -> Self {
        JsText { inner }
    }
}

impl From<JsText> for TextBuffer {
    fn from(text: JsText) -> Self {
        text.inner
    }
}
