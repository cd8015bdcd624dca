//! Filesystem case discovery
//!
//! Discovery is the I/O boundary of suite collection: it walks one corpus
//! subtree and produces `TestCase` records. The `CaseDiscovery` trait
//! separates that filesystem concern from aggregation, so the aggregation
//! contract can be exercised against stub discoveries in tests.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::suite::case::{Expectation, TestCase};
use crate::suite::config::SuiteConfig;

/// Errors that occur while discovering cases.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("test directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("malformed test case at {}: path is not valid UTF-8, no case name can be derived", .0.display())]
    MalformedCaseName(PathBuf),

    #[error("duplicate test case name '{name}' at {}", path.display())]
    DuplicateCaseName { name: String, path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discover the test cases below one corpus subtree.
pub trait CaseDiscovery {
    /// Return every case in `relative_dir`, stamped with `expectation`, in a
    /// stable order. Fails if the subtree is missing or a case is malformed;
    /// never returns a partial scan.
    fn scan_test_directory(
        &self,
        relative_dir: &Path,
        expectation: Expectation,
    ) -> Result<Vec<TestCase>, DiscoveryError>;
}

/// Filesystem-backed discovery rooted at a corpus root.
///
/// Walks a subtree recursively, skipping hidden entries. Every regular file
/// is a case, or only files with the configured extension when one is set.
/// Cases come back sorted by name so scan order is independent of directory
/// iteration order.
#[derive(Debug, Clone)]
pub struct FsCaseDiscovery {
    root: PathBuf,
    case_extension: Option<String>,
}

impl FsCaseDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            case_extension: None,
        }
    }

    pub fn with_case_extension(mut self, extension: impl Into<String>) -> Self {
        self.case_extension = Some(extension.into());
        self
    }

    /// Discovery matching a suite configuration's root and extension filter.
    pub fn from_config(config: &SuiteConfig) -> Self {
        Self {
            root: config.root.clone(),
            case_extension: config.case_extension.clone(),
        }
    }

    fn is_case_file(&self, path: &Path) -> bool {
        match &self.case_extension {
            Some(ext) => path.extension() == Some(OsStr::new(ext.as_str())),
            None => true,
        }
    }

    fn walk(&self, base: &Path, dir: &Path, expectation: Expectation, cases: &mut Vec<TestCase>) -> Result<(), DiscoveryError> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let entry_path = entry.path();
            let file_name = entry.file_name();

            // Hidden entries (.git, .gitkeep, editor droppings) are never cases
            if file_name.to_string_lossy().starts_with('.') {
                continue;
            }

            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                self.walk(base, &entry_path, expectation, cases)?;
            } else if file_type.is_file() && self.is_case_file(&entry_path) {
                let name = case_name(base, &entry_path)?;
                cases.push(TestCase::new(name, entry_path, expectation));
            }
        }
        Ok(())
    }
}

impl CaseDiscovery for FsCaseDiscovery {
    fn scan_test_directory(
        &self,
        relative_dir: &Path,
        expectation: Expectation,
    ) -> Result<Vec<TestCase>, DiscoveryError> {
        let dir = self.root.join(relative_dir);

        if !dir.exists() {
            return Err(DiscoveryError::MissingDirectory(dir));
        }
        if !dir.is_dir() {
            return Err(DiscoveryError::NotADirectory(dir));
        }

        let mut cases = Vec::new();
        self.walk(&dir, &dir, expectation, &mut cases)?;
        cases.sort_by(|a, b| a.name.cmp(&b.name));

        // Two files can share a name once extensions are stripped (`a` vs `a.txt`)
        for pair in cases.windows(2) {
            if pair[0].name == pair[1].name {
                return Err(DiscoveryError::DuplicateCaseName {
                    name: pair[1].name.clone(),
                    path: pair[1].path.clone(),
                });
            }
        }

        tracing::debug!(
            dir = %dir.display(),
            count = cases.len(),
            "scanned test directory"
        );

        Ok(cases)
    }
}

/// Derive a case name from a file path: the subtree-relative path with the
/// extension stripped and `/` separators on every platform.
fn case_name(base: &Path, path: &Path) -> Result<String, DiscoveryError> {
    let relative = path.strip_prefix(base).unwrap_or(path);
    let stem = relative.with_extension("");

    let mut parts = Vec::new();
    for component in stem.components() {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| DiscoveryError::MalformedCaseName(path.to_path_buf()))?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_name_strips_extension() {
        let name = case_name(Path::new("sema/positive"), Path::new("sema/positive/arith_ok.sema")).unwrap();
        assert_eq!(name, "arith_ok");
    }

    #[test]
    fn case_name_keeps_subdirectories() {
        let name = case_name(
            Path::new("sema/negative"),
            Path::new("sema/negative/types/mismatch.sema"),
        )
        .unwrap();
        assert_eq!(name, "types/mismatch");
    }

    #[test]
    fn case_name_without_extension_is_unchanged() {
        let name = case_name(Path::new("cases"), Path::new("cases/plain")).unwrap();
        assert_eq!(name, "plain");
    }

    #[test]
    fn extension_filter_matches_exactly() {
        let discovery = FsCaseDiscovery::new(".").with_case_extension("sema");
        assert!(discovery.is_case_file(Path::new("x/a.sema")));
        assert!(!discovery.is_case_file(Path::new("x/a.txt")));
        assert!(!discovery.is_case_file(Path::new("x/a")));
    }
}
