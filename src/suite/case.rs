//! The test-case record.

use std::fmt;
use std::path::PathBuf;

/// Expected semantic-analysis outcome for a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The analyzer must accept the case without diagnostics.
    Accept,
    /// The analyzer must reject the case.
    Reject,
}

impl Expectation {
    /// Stable lowercase name, used in listings and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Expectation::Accept => "accept",
            Expectation::Reject => "reject",
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single discovered test case.
///
/// Cases are constructed by discovery and read-only afterwards; the one
/// exception is the `optional` flag, set by
/// [`apply_optional_tags`](crate::suite::collect::apply_optional_tags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Case path relative to its scanned subtree, extension stripped,
    /// `/`-separated on every platform. Unique within one scan.
    pub name: String,
    /// Full path to the case file.
    pub path: PathBuf,
    /// Which verdict the downstream runner must require.
    pub expectation: Expectation,
    /// An optional case's failure is advisory, not fatal, for the runner.
    pub optional: bool,
}

impl TestCase {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, expectation: Expectation) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            expectation,
            optional: false,
        }
    }
}
