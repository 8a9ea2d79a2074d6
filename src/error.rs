//! Error handling types and utilities.

/// A specialized Result type for sonnet-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` at I/O and parse boundaries.
pub type Result<T> = anyhow::Result<T>;

/// A setting value outside its allowed set.
///
/// Produced when parsing search modes, highlight styles, and on/off toggles, whether
/// they come from a command or from the config file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} '{value}': expected one of {}", .allowed.join(", "))]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
    pub allowed: &'static [&'static str],
}

impl ParseValueError {
    pub fn new(kind: &'static str, value: impl Into<String>, allowed: &'static [&'static str]) -> Self {
        Self {
            kind,
            value: value.into(),
            allowed,
        }
    }
}
