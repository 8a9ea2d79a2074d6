//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `workspace`: an empty temporary directory for config and corpus files
//! - `sonnet_corpus`: the sample corpus written to `corpus.json` inside a workspace
//!
//! [`TempWorkspace`] keeps every test's files apart so no test touches the real
//! user config or cache directories.

use rstest::fixture;
use sonnet_search::{Corpus, Document};
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        sonnet_search::tracing::init(false);
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Absolute path of `relative` inside this workspace.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Creates a file with the given content within this workspace.
    ///
    /// Parent directories are created automatically if they don't exist.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }

    /// Reads a file from this workspace.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.root.join(path))
            .unwrap_or_else(|e| panic!("Failed to read file '{}': {}", path, e))
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The documents used across integration tests.
#[allow(dead_code)]
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new("Sonnet", ["My mistress' eyes", "Love is love"]),
        Document::new(
            "Shall I compare thee",
            ["Thou art more lovely and more temperate", "Rough winds do shake"],
        ),
        Document::new("Eyes of Love", ["nothing here", "and love again"]),
    ]
}

#[allow(dead_code)]
#[fixture]
pub fn workspace() -> TempWorkspace {
    TempWorkspace::new()
}

/// A workspace holding the sample corpus at `corpus.json`.
#[allow(dead_code)]
#[fixture]
pub fn sonnet_corpus() -> (TempWorkspace, PathBuf) {
    let workspace = TempWorkspace::new();
    let json = Corpus::new(sample_documents())
        .to_json()
        .expect("Failed to serialize corpus");
    let path = workspace.create_file("corpus.json", &json);
    (workspace, path)
}
