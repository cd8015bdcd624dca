//! Corpus layout configuration
//!
//! The corpus root and the two subtree paths are explicit configuration
//! values rather than hard-coded literals, so tests can point the collector
//! at fixture corpora.

use std::path::{Path, PathBuf};

/// Where a corpus lives on disk and which files in it count as cases.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Corpus root; the subtree paths below are resolved against it.
    pub root: PathBuf,
    /// Subtree of cases the analyzer must accept, relative to the root.
    pub positive_dir: PathBuf,
    /// Subtree of cases the analyzer must reject, relative to the root.
    pub negative_dir: PathBuf,
    /// When set, only files with this extension are cases; otherwise every
    /// non-hidden regular file is.
    pub case_extension: Option<String>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            positive_dir: PathBuf::from("sema/positive"),
            negative_dir: PathBuf::from("sema/negative"),
            case_extension: None,
        }
    }
}

impl SuiteConfig {
    /// Configuration for the conventional `sema/positive` + `sema/negative`
    /// layout under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_positive_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.positive_dir = dir.into();
        self
    }

    pub fn with_negative_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.negative_dir = dir.into();
        self
    }

    pub fn with_case_extension(mut self, extension: impl Into<String>) -> Self {
        self.case_extension = Some(extension.into());
        self
    }

    /// Full path of a subtree under this corpus.
    pub fn resolve(&self, relative_dir: &Path) -> PathBuf {
        self.root.join(relative_dir)
    }
}
