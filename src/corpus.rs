//! The searchable corpus: documents, per-document search, and loading.

use crate::error::Result;
use crate::search::{LineMatch, MatchRecord, find_spans};
use crate::text::{FoldedText, fold_case};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Corpus shipped with the binary, used when no file or cache is available.
const BUILTIN_CORPUS: &str = include_str!("../data/sonnets.json");

/// File name of the cached corpus inside the cache directory.
const CACHE_FILE: &str = "sonnets.json";

/// Wire shape of a document. Extra fields such as `author` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDocument {
    title: String,
    lines: Vec<String>,
}

/// A titled poem, kept in both original and case-folded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDocument", into = "RawDocument")]
pub struct Document {
    title: FoldedText,
    lines: Vec<FoldedText>,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        Self::new(raw.title, raw.lines)
    }
}

impl From<Document> for RawDocument {
    fn from(doc: Document) -> Self {
        Self {
            title: doc.title.original().to_string(),
            lines: doc.lines.iter().map(|l| l.original().to_string()).collect(),
        }
    }
}

impl Document {
    pub fn new<I, S>(title: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: FoldedText::new(title),
            lines: lines.into_iter().map(FoldedText::new).collect(),
        }
    }

    pub fn title(&self) -> &str {
        self.title.original()
    }

    /// Original-case lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(FoldedText::original)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Find every case-insensitive occurrence of `term` in the title and lines.
    ///
    /// Only lines with at least one occurrence get a [`LineMatch`]; line numbers are 1-based.
    pub fn search_for(&self, term: &str) -> MatchRecord {
        let term = fold_case(term);

        let title_spans = find_spans(self.title.folded(), &term);
        let line_matches = self
            .lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let spans = find_spans(line.folded(), &term);
                (!spans.is_empty()).then(|| LineMatch::new(idx + 1, line.original(), spans))
            })
            .collect();

        MatchRecord::new(self.title.original(), title_spans, line_matches)
    }
}

/// An ordered, read-only collection of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Parse a corpus from a JSON array of `{"title", "lines"}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let documents: Vec<Document> =
            serde_json::from_str(json).context("Failed to parse corpus JSON")?;
        Ok(Self::new(documents))
    }

    /// The corpus embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CORPUS).context("Built-in corpus is malformed")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.documents).context("Failed to serialize corpus")
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Where a loaded corpus came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// A file named on the command line
    File(PathBuf),
    /// The user cache
    Cache(PathBuf),
    /// The embedded corpus
    Builtin,
}

impl fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Cache(path) => write!(f, "cache {}", path.display()),
            Self::Builtin => write!(f, "built-in corpus"),
        }
    }
}

/// A corpus along with its origin and how long loading took.
#[derive(Debug)]
pub struct LoadedCorpus {
    pub corpus: Corpus,
    pub source: CorpusSource,
    pub elapsed: Duration,
}

/// Default location of the cached corpus.
pub fn default_cache_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(crate::APP_NAME).join(CACHE_FILE))
}

fn read_corpus_file(path: &Path) -> Result<Corpus> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus at {}", path.display()))?;
    Corpus::from_json(&content).with_context(|| format!("Invalid corpus at {}", path.display()))
}

fn write_cache(corpus: &Corpus, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create cache directory {}", parent.display()))?;
    }
    std::fs::write(path, corpus.to_json()?)
        .with_context(|| format!("Failed to write corpus cache {}", path.display()))
}

/// Load the corpus, preferring an explicit file, then the cache, then the embedded copy.
///
/// An explicit file that cannot be read is an error. A broken cache is logged and
/// replaced by the embedded corpus, which is written back to the cache on a best-effort
/// basis.
pub fn load_corpus(explicit: Option<&Path>, cache: Option<&Path>) -> Result<LoadedCorpus> {
    let start = Instant::now();

    let (corpus, source) = if let Some(path) = explicit {
        (read_corpus_file(path)?, CorpusSource::File(path.to_path_buf()))
    } else if let Some(path) = cache
        && path.exists()
    {
        match read_corpus_file(path) {
            Ok(corpus) => (corpus, CorpusSource::Cache(path.to_path_buf())),
            Err(e) => {
                tracing::warn!("Ignoring unreadable corpus cache: {:#}", e);
                (Corpus::builtin()?, CorpusSource::Builtin)
            }
        }
    } else {
        (Corpus::builtin()?, CorpusSource::Builtin)
    };

    if source == CorpusSource::Builtin
        && let Some(path) = cache
    {
        match write_cache(&corpus, path) {
            Ok(()) => tracing::debug!("Cached corpus at {}", path.display()),
            Err(e) => tracing::warn!("Could not cache corpus: {:#}", e),
        }
    }

    let elapsed = start.elapsed();
    tracing::info!(
        "Loaded {} documents from {} in {:?}",
        corpus.len(),
        source,
        elapsed
    );

    Ok(LoadedCorpus {
        corpus,
        source,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Span;
    use assert2::check;
    use rstest::{fixture, rstest};

    #[fixture]
    fn sonnet() -> Document {
        Document::new("Sonnet", ["My mistress' eyes", "Love is love"])
    }

    #[rstest]
    fn test_search_for_is_case_insensitive(sonnet: Document) {
        let record = sonnet.search_for("LOVE");
        check!(record.matches == 2);
        check!(record.title_spans.is_empty());
        check!(record.line_matches.len() == 1);
        check!(record.line_matches[0].line_no == 2);
        check!(record.line_matches[0].text == "Love is love");
        check!(record.line_matches[0].spans == vec![Span::new(0, 4), Span::new(8, 12)]);
    }

    #[rstest]
    fn test_search_for_matches_title(sonnet: Document) {
        let record = sonnet.search_for("son");
        check!(record.title == "Sonnet");
        check!(record.title_spans == vec![Span::new(0, 3)]);
        check!(record.line_matches.is_empty());
        check!(record.matches == 1);
    }

    #[rstest]
    #[case("")]
    #[case("absent")]
    fn test_search_for_without_matches(sonnet: Document, #[case] term: &str) {
        let record = sonnet.search_for(term);
        check!(record.matches == 0);
        check!(record.line_matches.is_empty());
    }

    #[rstest]
    fn test_search_for_counts_overlaps(#[values("ee", "EE")] term: &str) {
        let doc = Document::new("T", ["eee"]);
        check!(doc.search_for(term).matches == 2);
    }

    #[test]
    fn test_builtin_corpus_parses() {
        let corpus = Corpus::builtin().unwrap();
        check!(corpus.len() == 154);
        check!(corpus.iter().all(|d| d.line_count() > 0));
        check!(corpus.documents()[0].title().starts_with("Sonnet 1:"));
        check!(corpus.documents()[153].title().starts_with("Sonnet 154:"));
    }

    #[test]
    fn test_json_ignores_extra_fields() {
        let corpus =
            Corpus::from_json(r#"[{"title": "A", "lines": ["x"], "author": "W", "linecount": "1"}]"#)
                .unwrap();
        check!(corpus.len() == 1);
        check!(corpus.documents()[0].title() == "A");
        check!(corpus.documents()[0].lines().collect::<Vec<_>>() == vec!["x"]);
    }

    #[test]
    fn test_json_round_trip_keeps_original_case() {
        let corpus = Corpus::new(vec![Document::new("Title", ["Mixed Case"])]);
        let restored = Corpus::from_json(&corpus.to_json().unwrap()).unwrap();
        check!(restored == corpus);
    }

    #[test]
    fn test_json_rejects_missing_lines() {
        check!(Corpus::from_json(r#"[{"title": "A"}]"#).is_err());
    }
}
