//! Multi-term query evaluation over a corpus.

use super::record::MatchRecord;
use crate::corpus::{Corpus, Document};
use crate::error::ParseValueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How per-term results combine into one result per document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchMode {
    /// A document must match every term
    #[default]
    And,
    /// A document must match at least one term
    Or,
}

impl SearchMode {
    pub const NAMES: &'static [&'static str] = &["AND", "OR"];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            _ => Err(ParseValueError::new("search mode", s, Self::NAMES)),
        }
    }
}

/// Evaluates whitespace-separated queries against a borrowed corpus.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    corpus: &'a Corpus,
}

impl<'a> SearchEngine<'a> {
    pub const fn new(corpus: &'a Corpus) -> Self {
        Self { corpus }
    }

    /// Search every document for one term, in corpus order.
    pub fn search_term(&self, term: &str) -> Vec<MatchRecord> {
        self.corpus.iter().map(|doc| doc.search_for(term)).collect()
    }

    /// Evaluate `query` and return one record per document, in corpus order.
    ///
    /// Terms are folded left to right. Document `i`'s running record only ever combines
    /// with document `i`'s record for the next term. A query with no terms yields no
    /// records.
    pub fn search(&self, query: &str, mode: SearchMode) -> Vec<MatchRecord> {
        let mut terms = query.split_whitespace();
        let Some(first) = terms.next() else {
            return Vec::new();
        };

        let mut results = self.search_term(first);
        for term in terms {
            let next = self.search_term(term);
            results = fold_term(results, next, mode);
        }

        tracing::debug!(
            query,
            %mode,
            matched = results.iter().filter(|r| r.is_match()).count(),
            "evaluated query"
        );
        results
    }

    /// Evaluate `query` and pair each record with its document.
    pub fn search_documents(&self, query: &str, mode: SearchMode) -> Vec<(&'a Document, MatchRecord)> {
        self.corpus.iter().zip(self.search(query, mode)).collect()
    }
}

/// Fold one term's records into the running records, slot by slot.
///
/// In AND mode a slot where either side has no matches gets its count zeroed; any
/// spans it already held stay.
fn fold_term(running: Vec<MatchRecord>, next: Vec<MatchRecord>, mode: SearchMode) -> Vec<MatchRecord> {
    debug_assert_eq!(running.len(), next.len());

    running
        .into_iter()
        .zip(next)
        .map(|(acc, new)| match mode {
            SearchMode::Or => acc.combine(&new),
            SearchMode::And if acc.is_match() && new.is_match() => acc.combine(&new),
            SearchMode::And => acc.zeroed(),
        })
        .collect()
}
