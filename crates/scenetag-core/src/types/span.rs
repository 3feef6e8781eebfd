use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` range of character offsets into a subject string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Converts a byte range reported by the regex engine into character
    /// offsets.
    #[must_use]
    pub fn from_byte_range(subject: &str, range: Range<usize>) -> Self {
        let start = subject[..range.start].chars().count();
        let end = start + subject[range].chars().count();
        Self { start, end }
    }

    /// Shifts both ends by the given deltas, clamped so that
    /// `0 <= start <= end <= len` still holds.
    #[must_use]
    pub fn adjust(self, (start_delta, end_delta): (isize, isize), len: usize) -> Self {
        let shift = |offset: usize, delta: isize| offset.saturating_add_signed(delta).min(len);
        let start = shift(self.start, start_delta);
        let end = shift(self.end, end_delta).max(start);
        Self { start, end }
    }

    /// Number of characters covered; zero for an inverted span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The substring this span covers.
    pub fn slice<'a>(&self, subject: &'a str) -> &'a str {
        let byte_at = |offset: usize| {
            subject
                .char_indices()
                .nth(offset)
                .map_or(subject.len(), |(index, _)| index)
        };
        let start = byte_at(self.start);
        &subject[start..byte_at(self.end).max(start)]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_range_to_char_offsets() {
        let subject = "Amélie.720p";
        let start = subject.find("720p").unwrap();
        let span = Span::from_byte_range(subject, start..start + 4);
        assert_eq!(span, Span::new(7, 11));
        assert_eq!(span.slice(subject), "720p");
    }

    #[test]
    fn adjust_trims_overcaptured_separators() {
        let span = Span::new(3, 10).adjust((1, -1), 20);
        assert_eq!(span, Span::new(4, 9));
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn adjust_is_clamped() {
        assert_eq!(Span::new(0, 2).adjust((-1, 5), 4), Span::new(0, 4));
        assert_eq!(Span::new(2, 3).adjust((2, -2), 10), Span::new(4, 4));
        assert!(Span::new(2, 3).adjust((2, -2), 10).is_empty());
    }

    #[test]
    fn inverted_span_is_empty() {
        let span = Span { start: 9, end: 4 };
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert_eq!(span.slice("Movie.720p.BluRay"), "");
    }

    #[test]
    fn display() {
        assert_eq!(Span::new(5, 9).to_string(), "5..9");
    }
}
