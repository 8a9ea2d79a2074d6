//! Per-document match records and their combination.

use super::spans::Span;
use std::collections::BTreeMap;

/// Matches found on a single line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1-based line number
    pub line_no: usize,
    /// Original-case line text
    pub text: String,
    pub spans: Vec<Span>,
}

impl LineMatch {
    pub fn new(line_no: usize, text: impl Into<String>, spans: Vec<Span>) -> Self {
        Self {
            line_no,
            text: text.into(),
            spans,
        }
    }
}

/// Match data for one document against one term, or against a folded multi-term query.
///
/// `matches` normally equals the number of spans held. An AND query whose later term
/// misses a document zeroes the count but keeps the spans gathered so far; such a record
/// reports [`MatchRecord::is_match`] as false and must be treated as a non-match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub title: String,
    pub title_spans: Vec<Span>,
    /// Ordered by `line_no`, one entry per line
    pub line_matches: Vec<LineMatch>,
    pub matches: usize,
}

impl MatchRecord {
    pub fn new(title: impl Into<String>, title_spans: Vec<Span>, line_matches: Vec<LineMatch>) -> Self {
        let mut record = Self {
            title: title.into(),
            title_spans,
            line_matches,
            matches: 0,
        };
        record.matches = record.span_count();
        record
    }

    /// Whether the document counts as matched.
    pub const fn is_match(&self) -> bool {
        self.matches > 0
    }

    /// Total spans held across the title and all lines.
    pub fn span_count(&self) -> usize {
        self.title_spans.len() + self.line_matches.iter().map(|lm| lm.spans.len()).sum::<usize>()
    }

    /// The same record with its count forced to zero. Spans are left in place.
    #[must_use]
    pub fn zeroed(self) -> Self {
        Self { matches: 0, ..self }
    }

    /// Merge two records produced against the same document.
    ///
    /// Title spans are unioned in `(start, end)` order with duplicates kept. Line
    /// matches are grouped by line number, concatenating spans for lines present on
    /// both sides. `matches` is the plain sum of both counts.
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        debug_assert_eq!(self.title, other.title, "combining records of different documents");

        let mut title_spans: Vec<Span> = self
            .title_spans
            .iter()
            .chain(&other.title_spans)
            .copied()
            .collect();
        title_spans.sort();

        let mut lines: BTreeMap<usize, LineMatch> = BTreeMap::new();
        for lm in self.line_matches.iter().chain(&other.line_matches) {
            lines
                .entry(lm.line_no)
                .and_modify(|existing| existing.spans.extend_from_slice(&lm.spans))
                .or_insert_with(|| lm.clone());
        }

        Self {
            title: self.title.clone(),
            title_spans,
            line_matches: lines.into_values().collect(),
            matches: self.matches + other.matches,
        }
    }
}
