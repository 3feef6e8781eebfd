//! Token separators in release names.

/// Characters that delimit tokens.
pub const SEPARATORS: &[char] = &[
    ' ', '.', '_', '-', '/', '\\', '(', ')', '[', ']', '{', '}', ',', '+',
];

/// Regex character class matching exactly one separator.
pub const SEPARATOR_CLASS: &str = r"[ ._\-/\\()\[\]{},+]";

/// Bracket pairs that enclose a group, such as `[XCT]` or `(1080i)`.
pub const GROUP_DELIMITERS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}')];

/// Whether `c` delimits tokens.
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// The closing bracket for an opening group delimiter.
pub fn closing_delimiter(open: char) -> Option<char> {
    GROUP_DELIMITERS
        .iter()
        .find_map(|&(o, c)| (o == open).then_some(c))
}

/// Whether the byte range `start..end` of `subject` is delimited on both
/// sides. An edge of the string counts as a delimiter.
///
/// Offsets that fall outside `subject` or inside a multi-byte character are
/// never bounded.
pub fn is_bounded(subject: &str, start: usize, end: usize) -> bool {
    let (Some(head), Some(tail)) = (subject.get(..start), subject.get(end..)) else {
        return false;
    };
    if start > end {
        return false;
    }
    let before = head.chars().next_back();
    let after = tail.chars().next();
    before.is_none_or(is_separator) && after.is_none_or(is_separator)
}

/// Whether `token` is wrapped in one matching pair of group delimiters.
pub fn is_grouped(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) => closing_delimiter(open) == Some(close),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    #[test]
    fn class_agrees_with_char_list() {
        let class = Regex::new(&format!("^{SEPARATOR_CLASS}$")).unwrap();
        for c in SEPARATORS {
            assert!(class.is_match(&c.to_string()), "class misses {c:?}");
        }
        for c in ['a', 'Z', '0', ':', ';', '|', '!', '~', '\''] {
            assert!(!is_separator(c));
            assert!(!class.is_match(&c.to_string()), "class accepts {c:?}");
        }
    }

    #[test]
    fn bounded_by_separators_or_edges() {
        assert!(is_bounded("Movie.720p.x264", 6, 10));
        assert!(is_bounded("720p", 0, 4));
        assert!(is_bounded("[720p]", 1, 5));
        assert!(!is_bounded("a720px264", 1, 5));
        assert!(!is_bounded("Movie.720px264", 6, 10));
    }

    #[test]
    fn offsets_off_char_boundaries_are_not_bounded() {
        // 'é' spans bytes 2..4
        assert!(!is_bounded("Amélie", 3, 5));
        assert!(!is_bounded("Amélie", 1, 3));
        assert!(!is_bounded("720p", 0, 40));
        assert!(!is_bounded("720p", 3, 1));
        assert!(is_bounded("é.720p", 3, 7));
    }

    #[test]
    fn group_delimiters_are_separators() {
        for &(open, close) in GROUP_DELIMITERS {
            assert!(is_separator(open) && is_separator(close));
            assert_eq!(closing_delimiter(open), Some(close));
        }
        assert_eq!(closing_delimiter('.'), None);
    }

    #[test]
    fn grouped_tokens() {
        assert!(is_grouped("[XCT]"));
        assert!(is_grouped("(1080i)"));
        assert!(is_grouped("{5ch}"));
        assert!(!is_grouped("[XCT)"));
        assert!(!is_grouped("XCT"));
        assert!(!is_grouped("["));
        assert!(!is_grouped(""));
    }
}
