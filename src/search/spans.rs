//! Literal occurrence search.

/// A half-open `[start, end)` range of char offsets marking one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// Find every occurrence of `pattern` in `text`, overlapping ones included.
///
/// Both arguments must already be case-folded; no normalization happens here.
/// Offsets are in chars. Returns nothing for an empty pattern or one longer than
/// the text.
pub fn find_spans(text: &str, pattern: &str) -> Vec<Span> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern.as_slice())
        .map(|(i, _)| Span::new(i, i + pattern.len()))
        .collect()
}
