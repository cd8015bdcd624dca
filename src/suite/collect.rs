//! Suite aggregation
//!
//! The complete suite is the positive subtree's cases followed by the
//! negative subtree's cases, each group in the order discovery returned it.
//! Aggregation introduces no failure modes of its own: a failed scan fails
//! the whole collection and no partial suite is ever returned.

use std::collections::BTreeSet;

use crate::suite::case::{Expectation, TestCase};
use crate::suite::config::SuiteConfig;
use crate::suite::discovery::{CaseDiscovery, DiscoveryError, FsCaseDiscovery};

/// Collect the full ordered suite for `config` from the filesystem.
pub fn collect_tests(config: &SuiteConfig) -> Result<Vec<TestCase>, DiscoveryError> {
    collect_tests_with(config, &FsCaseDiscovery::from_config(config))
}

/// Collect the full ordered suite using the given discovery.
///
/// Scans the positive subtree, then the negative subtree, and concatenates
/// the two scans in that order.
pub fn collect_tests_with<D: CaseDiscovery>(
    config: &SuiteConfig,
    discovery: &D,
) -> Result<Vec<TestCase>, DiscoveryError> {
    let mut tests = discovery.scan_test_directory(&config.positive_dir, Expectation::Accept)?;
    tests.extend(discovery.scan_test_directory(&config.negative_dir, Expectation::Reject)?);

    tracing::debug!(count = tests.len(), "collected suite");

    Ok(tests)
}

/// Flag every case whose name is in `optionals`.
///
/// Pure post-processing over an aggregated suite, kept separate from
/// collection itself: order, length and all other fields are preserved, and
/// names that match no case are ignored.
pub fn apply_optional_tags(tests: Vec<TestCase>, optionals: &BTreeSet<String>) -> Vec<TestCase> {
    tests
        .into_iter()
        .map(|mut test| {
            if optionals.contains(&test.name) {
                test.optional = true;
            }
            test
        })
        .collect()
}
