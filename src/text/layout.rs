//! Line segmentation and indentation
//!
//! A line segment is the line content plus the break that ends it, so
//! joining the segments of a string gives back the string.

use regex::Regex;

use super::pattern::LINE_BREAK;

/// Split `text` after every match of `breaks`
///
/// A trailing break yields a final empty segment and an empty `text` yields
/// one empty segment.
pub(crate) fn split_segments<'t>(text: &'t str, breaks: &Regex) -> Vec<&'t str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for m in breaks.find_iter(text) {
        if m.end() == start {
            continue;
        }
        segments.push(&text[start..m.end()]);
        start = m.end();
    }
    segments.push(&text[start..]);

    segments
}

/// Prefix every line start with `width` spaces
pub(crate) fn indent(text: &str, width: usize) -> String {
    let prefix = " ".repeat(width);
    let segments = split_segments(text, &LINE_BREAK);
    let last = segments.len() - 1;

    let mut out = String::with_capacity(text.len() + segments.len() * width);
    for (i, segment) in segments.iter().enumerate() {
        // Nothing follows a trailing break, so there is no line to indent
        if !(i == last && i > 0 && segment.is_empty()) {
            out.push_str(&prefix);
        }
        out.push_str(segment);
    }
    out
}

/// Remove one tab, or up to `width` spaces, from every line start
pub(crate) fn outdent(text: &str, width: usize) -> String {
    split_segments(text, &LINE_BREAK)
        .into_iter()
        .map(|segment| strip_indent(segment, width))
        .collect()
}

fn strip_indent(line: &str, width: usize) -> &str {
    if let Some(rest) = line.strip_prefix('\t') {
        return rest;
    }
    let spaces = line.bytes().take(width).take_while(|&b| b == b' ').count();
    &line[spaces..]
}

/// Expand tabs to the next multiple of `width`, counting codepoints per line
pub(crate) fn detab(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;

    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = if width == 0 { 0 } else { width - column % width };
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_segments_keeps_breaks() {
        assert_eq!(split_segments("1\n2\r\n3", &LINE_BREAK), vec!["1\n", "2\r\n", "3"]);
        assert_eq!(split_segments("a\n", &LINE_BREAK), vec!["a\n", ""]);
        assert_eq!(split_segments("", &LINE_BREAK), vec![""]);
        assert_eq!(split_segments("\n\n", &LINE_BREAK), vec!["\n", "\n", ""]);
    }

    #[test]
    fn test_split_segments_custom_breaks() {
        let breaks = Regex::new(";").unwrap();
        assert_eq!(split_segments("a;b;", &breaks), vec!["a;", "b;", ""]);
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("line1\nline2\r\n", 4), "    line1\n    line2\r\n");
        assert_eq!(indent("a\n\nb", 2), "  a\n  \n  b");
        assert_eq!(indent("", 2), "  ");
        assert_eq!(indent("a\nb", 0), "a\nb");
    }

    #[test]
    fn test_outdent() {
        let input = "    line1\n   line2\r\n     line3\n\tline4\n\t\tline5";
        let expected = "line1\nline2\r\n line3\nline4\n\tline5";
        assert_eq!(outdent(input, 4), expected);
        assert_eq!(outdent("  \tx", 4), "\tx");
        assert_eq!(outdent("\t  x\n  y", 0), "  x\n  y");
    }

    #[test]
    fn test_detab() {
        assert_eq!(detab("12\t56", 4), "12  56");
        assert_eq!(detab("a\tbc\td", 4), "a   bc  d");
        assert_eq!(detab("abcd\te", 4), "abcd    e");
        assert_eq!(detab("x\n\ty", 2), "x\n  y");
        // Column counts codepoints, not bytes
        assert_eq!(detab("é\tx", 4), "é   x");
        assert_eq!(detab("a\tb", 0), "ab");
    }
}
