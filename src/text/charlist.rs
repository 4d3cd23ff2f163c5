//! Character lists for the trim family
//!
//! A list names individual characters and may use `a..z` to cover an
//! inclusive range.

use std::ops::RangeInclusive;

/// Characters stripped by `trim()` when no list is given
const DEFAULT_TRIM: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharList {
    singles: Vec<char>,
    ranges: Vec<RangeInclusive<char>>,
}

impl CharList {
    /// Space, tab, line feed, carriage return, NUL and vertical tab
    pub fn whitespace() -> Self {
        Self {
            singles: DEFAULT_TRIM.to_vec(),
            ranges: Vec::new(),
        }
    }

    /// Parse a character list such as `"/"`, `" \t"` or `"a..f0..9"`
    ///
    /// A `..` that cannot form an ascending range is reported and its
    /// characters are kept literally where possible.
    pub fn parse(list: &str) -> Self {
        let chars: Vec<char> = list.chars().collect();
        let mut singles = Vec::new();
        let mut ranges = Vec::new();

        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if i + 3 < chars.len()
                && chars[i + 1] == '.'
                && chars[i + 2] == '.'
                && chars[i + 3] >= c
            {
                ranges.push(c..=chars[i + 3]);
                i += 4;
                continue;
            }
            if i + 1 < chars.len() && c == '.' && chars[i + 1] == '.' {
                if i == 0 {
                    log::warn!("invalid '..' range in {:?}: no character to the left", list);
                } else if i + 2 >= chars.len() {
                    log::warn!("invalid '..' range in {:?}: no character to the right", list);
                } else {
                    log::warn!(
                        "invalid '..' range in {:?}: left character is greater than right",
                        list
                    );
                }
                i += 1;
                continue;
            }
            singles.push(c);
            i += 1;
        }

        Self { singles, ranges }
    }

    pub fn contains(&self, c: char) -> bool {
        self.singles.contains(&c) || self.ranges.iter().any(|r| r.contains(&c))
    }
}

impl Default for CharList {
    fn default() -> Self {
        Self::whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_set() {
        let list = CharList::whitespace();
        for c in [' ', '\t', '\n', '\r', '\0', '\x0B'] {
            assert!(list.contains(c));
        }
        // Form feed and non-ASCII spaces are not part of the default set
        assert!(!list.contains('\x0C'));
        assert!(!list.contains('\u{00A0}'));
    }

    #[test]
    fn test_parse_singles() {
        let list = CharList::parse("/-");
        assert!(list.contains('/'));
        assert!(list.contains('-'));
        assert!(!list.contains('a'));
    }

    #[test]
    fn test_parse_range() {
        let list = CharList::parse("a..cX");
        assert!(list.contains('a'));
        assert!(list.contains('b'));
        assert!(list.contains('c'));
        assert!(list.contains('X'));
        assert!(!list.contains('d'));
        assert!(!list.contains('.'));
    }

    #[test]
    fn test_descending_range_is_literal() {
        let list = CharList::parse("z..a");
        assert!(list.contains('z'));
        assert!(list.contains('.'));
        assert!(list.contains('a'));
        assert!(!list.contains('m'));
    }

    #[test]
    fn test_dangling_range() {
        let list = CharList::parse("..");
        assert!(list.contains('.'));
        let list = CharList::parse("a..");
        assert!(list.contains('a'));
        assert!(list.contains('.'));
    }
}
