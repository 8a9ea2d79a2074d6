//! Case normalization for matching.
//!
//! Matching runs on a folded copy of each text while rendering uses the original.
//! Folding maps every `char` to exactly one `char`, so a char offset computed against
//! the folded text addresses the same character in the original.

/// Lowercase `text` one char at a time, keeping the char count unchanged.
///
/// Characters whose lowercase form expands to several chars (e.g. `İ`) keep only the
/// first one.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// A text paired with its case-folded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedText {
    original: String,
    folded: String,
}

impl FoldedText {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let folded = fold_case(&original);
        Self { original, folded }
    }

    /// The text as it appears in the corpus.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The text used for matching.
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

/// Translate a char offset into a byte offset within `text`.
///
/// Offsets past the end clamp to `text.len()`.
pub(crate) fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}
