//! ANSI highlighting of matched spans.

use crate::error::ParseValueError;
use crate::search::Span;
use crate::text::byte_offset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resets all terminal attributes after a highlighted region.
pub const RESET: &str = "\x1b[0m";

/// Visual style of highlighted regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HighlightStyle {
    /// Black text on a yellow background
    #[default]
    Default,
    /// Bold bright-green text
    Green,
}

impl HighlightStyle {
    pub const NAMES: &'static [&'static str] = &["DEFAULT", "GREEN"];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Green => "GREEN",
        }
    }

    /// Escape sequence opening a highlighted region.
    pub const fn start_marker(self) -> &'static str {
        match self {
            Self::Default => "\x1b[43m\x1b[30m",
            Self::Green => "\x1b[1;92m",
        }
    }
}

impl fmt::Display for HighlightStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HighlightStyle {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEFAULT" => Ok(Self::Default),
            "GREEN" => Ok(Self::Green),
            _ => Err(ParseValueError::new("highlight mode", s, Self::NAMES)),
        }
    }
}

/// Collapse spans into a sorted, minimal cover.
///
/// A span merges into the previous region when it starts at or before that region's
/// end, so overlapping, nested and touching spans all become one region.
pub fn merge_spans(spans: &[Span]) -> Vec<Span> {
    let mut sorted = spans.to_vec();
    sorted.sort();

    let mut merged: Vec<Span> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match merged.last_mut() {
            Some(current) if span.start <= current.end => current.end = current.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

/// Wrap every matched region of `text` in `style`'s markers.
///
/// Span offsets are char offsets into the case-folded form of `text`; the output
/// keeps the original casing. Without spans the text comes back unchanged.
pub fn render(text: &str, spans: &[Span], style: HighlightStyle) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    let marker = style.start_marker();
    let merged = merge_spans(spans);
    let mut out = String::with_capacity(text.len() + merged.len() * (marker.len() + RESET.len()));

    let mut cursor = 0;
    for span in merged {
        let start = byte_offset(text, span.start).max(cursor);
        let end = byte_offset(text, span.end);
        out.push_str(&text[cursor..start]);
        out.push_str(marker);
        out.push_str(&text[start..end]);
        out.push_str(RESET);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}
