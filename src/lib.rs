#![forbid(unsafe_code)]
//! Semantic-analysis corpus collection
//!
//! A conformance corpus lives on disk as two directory subtrees under a
//! corpus root: *positive* cases that the semantic analyzer must accept, and
//! *negative* cases it must reject. This crate discovers every case file in
//! both subtrees and aggregates them into a single ordered suite for a
//! downstream test runner: all positive cases first, then all negative
//! cases.
//!
//! Running cases and judging verdicts is the runner's job, not this crate's.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod suite;
pub mod version;

pub use suite::case::{Expectation, TestCase};
pub use suite::collect::{apply_optional_tags, collect_tests, collect_tests_with};
pub use suite::config::SuiteConfig;
pub use suite::discovery::{CaseDiscovery, DiscoveryError, FsCaseDiscovery};
