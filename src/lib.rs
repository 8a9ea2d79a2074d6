pub mod cli;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod error;
pub mod highlight;
pub mod repl;
pub mod report;
pub mod search;
pub mod text;
pub mod tracing;

/// Directory name used under the user's config and cache directories.
pub const APP_NAME: &str = "sonnet-search";

pub use config::Config;
pub use corpus::{Corpus, Document};
pub use highlight::HighlightStyle;
pub use search::{LineMatch, MatchRecord, SearchEngine, SearchMode, Span};
