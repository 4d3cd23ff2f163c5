// End-to-end behavior of TextBuffer chains

use fluent_text::{QuoteMode, Replacement, TextBuffer, TextError, DEFAULT_WIDTH};
use regex::Regex;

#[test]
fn test_append_then_get_text() {
    let mut text = TextBuffer::new("foo");
    text.append("bar");
    assert_eq!(text.get_text(), "foobar");
}

#[test]
fn test_chain_trim_upper_wrap() {
    // Mutators return the same buffer, so effects apply in order
    let mut text = TextBuffer::new("  hello world \n");
    text.trim().upper().wrap_with("<p>", "</p>");
    assert_eq!(text, "<p>HELLO WORLD</p>");
}

#[test]
fn test_chain_through_regex_step() {
    let mut text = TextBuffer::new(" a-b-c ");
    text.trim()
        .replace("-", "+")
        .expect("valid pattern")
        .wrap("|");
    assert_eq!(text, "|a+b+c|");
}

#[test]
fn test_escape_html_script() {
    let mut text = TextBuffer::new("<script></script>");
    text.escape_html(QuoteMode::default());
    assert_eq!(text, "&lt;script&gt;&lt;/script&gt;");
}

#[test]
fn test_replace_with_upper_transform() {
    let mut text = TextBuffer::new("foobar");
    text.replace_with("bar", |mut m| m[0].upper().to_string())
        .expect("valid pattern");
    assert_eq!(text, "fooBAR");
}

#[test]
fn test_transform_groups_are_independent() {
    // Mutating a group buffer inside the callback must not leak anywhere else
    let mut text = TextBuffer::new("k=v");
    text.replace_with(r"(\w)=(\w)", |mut groups| {
        groups[1].upper();
        format!("{}:{}", groups[1], groups[2])
    })
    .expect("valid pattern");
    assert_eq!(text, "K:v");
}

#[test]
fn test_replacement_variants_with_compiled_regex() {
    let digits = Regex::new(r"\d+").unwrap();

    let mut text = TextBuffer::new("a1b22");
    text.replace(&digits, Replacement::literal("#")).unwrap();
    assert_eq!(text, "a#b#");

    let mut text = TextBuffer::new("a1b22");
    text.replace(&digits, Replacement::transform(|m| m[0].length()))
        .unwrap();
    assert_eq!(text, "a1b2");
}

#[test]
fn test_invalid_pattern_is_atomic() {
    let mut text = TextBuffer::new("unchanged");
    let result = text.replace_with("(?<bad", |_| "x");
    assert!(matches!(result, Err(TextError::Pattern { .. })));
    assert_eq!(text, "unchanged");
}

#[test]
fn test_indent_mixed_line_endings() {
    let mut text = TextBuffer::new("line1\nline2\r\n");
    text.indent(4);
    assert_eq!(text, "    line1\n    line2\r\n");
}

#[test]
fn test_indent_then_outdent_restores() {
    let original = "This is line1\nThis is line2\r\nThis is line3\n";
    let mut text = TextBuffer::new(original);
    text.indent(DEFAULT_WIDTH).outdent(DEFAULT_WIDTH);
    assert_eq!(text, original);
}

#[test]
fn test_outdent_uneven_indentation() {
    let mut text = TextBuffer::new("    This is line1\n   This is line2\r\n     This is line3\n");
    text.outdent(4);
    assert_eq!(text, "This is line1\nThis is line2\r\n This is line3\n");
}

#[test]
fn test_lines_and_count() {
    let text = TextBuffer::new("1\n2\n3");
    assert_eq!(text.lines(), vec!["1\n", "2\n", "3"]);
    assert_eq!(text.count_lines(), 3);
}

#[test]
fn test_lines_reconstruct_original() {
    for original in ["", "x", "a\nb", "a\r\n\r\nb\n", "\n", "é\n😀\r\nü"] {
        let joined: String = TextBuffer::new(original)
            .lines()
            .iter()
            .map(TextBuffer::get_text)
            .collect();
        assert_eq!(joined, original);
    }
}

#[test]
fn test_derived_buffers_are_independent() {
    let source = TextBuffer::new("a\nb");
    let mut lines = source.lines();
    lines[0].upper();
    assert_eq!(lines[0], "A\n");
    assert_eq!(lines[1], "b");
    assert_eq!(source, "a\nb");
}

#[test]
fn test_detab_fills_to_column() {
    let mut text = TextBuffer::new("12\t56");
    text.detab(4);
    assert_eq!(text, "12  56");
}

#[test]
fn test_each_line_numbers_lines() {
    let mut text = TextBuffer::new("This is line1\nThis is line2\r\nThis is line3");
    text.each_line(|mut line, index| {
        line.prepend(format!("{}: ", index + 1));
        line
    });
    assert_eq!(text.to_string(), "1: This is line1\n2: This is line2\r\n3: This is line3");
}

#[test]
fn test_codepoint_semantics() {
    let text = TextBuffer::new("héllo wörld");
    assert_eq!(text.length(), 11);
    assert_eq!(text.index_of("w", 0), Some(6));
    assert_eq!(text.chars(4), vec!["héll", "o wö", "rld"]);
}

#[test]
fn test_match_and_split() {
    let text = TextBuffer::new("1st2nd3rd");
    let groups = text.match_groups(r"(\d)rd+").unwrap().expect("a match");
    assert_eq!(groups, vec!["3rd", "3"]);

    let text = TextBuffer::new("a,b,c");
    assert_eq!(text.split(",").unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_queries_do_not_mutate() {
    let text = TextBuffer::new(" 42 ");
    assert!(text.is_numeric());
    assert!(!text.is_empty());
    assert_eq!(text.index_of("nope", 0), None);
    assert_eq!(text, " 42 ");
}
