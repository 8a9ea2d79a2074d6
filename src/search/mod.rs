//! Literal substring search over the corpus.
//!
//! This module provides occurrence finding, per-document match records with their
//! combination algebra, and multi-term query evaluation under AND/OR semantics.

// Module declarations
pub(crate) mod engine;
pub(crate) mod record;
pub(crate) mod spans;

// Public re-exports (used via lib.rs)
pub use engine::{SearchEngine, SearchMode};
pub use record::{LineMatch, MatchRecord};
pub use spans::{Span, find_spans};
