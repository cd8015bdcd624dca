//! Property-based tests for suite aggregation
//!
//! These tests use proptest to verify the aggregation invariants across many
//! randomly generated corpora, catching edge cases that hand-written tests
//! might miss. Discovery is stubbed out so only the aggregation contract is
//! under test.

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;
use sema_corpus::{
    CaseDiscovery, DiscoveryError, Expectation, SuiteConfig, TestCase, apply_optional_tags,
    collect_tests_with,
};

/// In-memory discovery returning pre-built case lists per subtree.
struct StubDiscovery {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl CaseDiscovery for StubDiscovery {
    fn scan_test_directory(
        &self,
        relative_dir: &Path,
        expectation: Expectation,
    ) -> Result<Vec<TestCase>, DiscoveryError> {
        let names = match expectation {
            Expectation::Accept => &self.positive,
            Expectation::Reject => &self.negative,
        };
        Ok(names
            .iter()
            .map(|name| TestCase::new(name.clone(), relative_dir.join(name), expectation))
            .collect())
    }
}

// Strategy for generating case names
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}"
}

// Strategy for one subtree's scan result
fn scan_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name_strategy(), 0..16)
}

proptest! {
    /// Property: the suite length equals the sum of both scans' lengths
    #[test]
    fn suite_length_is_the_sum_of_both_scans(
        positive in scan_strategy(),
        negative in scan_strategy()
    ) {
        let discovery = StubDiscovery { positive: positive.clone(), negative: negative.clone() };
        let suite = collect_tests_with(&SuiteConfig::default(), &discovery).unwrap();

        prop_assert_eq!(suite.len(), positive.len() + negative.len());
    }

    /// Property: every positive case precedes every negative case, and each
    /// group keeps the scan's internal order
    #[test]
    fn positive_block_precedes_negative_block(
        positive in scan_strategy(),
        negative in scan_strategy()
    ) {
        let discovery = StubDiscovery { positive: positive.clone(), negative: negative.clone() };
        let suite = collect_tests_with(&SuiteConfig::default(), &discovery).unwrap();

        let (head, tail) = suite.split_at(positive.len());

        prop_assert!(head.iter().all(|t| t.expectation == Expectation::Accept));
        prop_assert!(tail.iter().all(|t| t.expectation == Expectation::Reject));

        let head_names: Vec<&str> = head.iter().map(|t| t.name.as_str()).collect();
        let tail_names: Vec<&str> = tail.iter().map(|t| t.name.as_str()).collect();
        prop_assert_eq!(head_names, positive.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(tail_names, negative.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Property: aggregation neither drops nor duplicates cases
    #[test]
    fn suite_names_are_the_multiset_union_of_both_scans(
        positive in scan_strategy(),
        negative in scan_strategy()
    ) {
        let discovery = StubDiscovery { positive: positive.clone(), negative: negative.clone() };
        let suite = collect_tests_with(&SuiteConfig::default(), &discovery).unwrap();

        let mut collected: Vec<String> = suite.into_iter().map(|t| t.name).collect();
        let mut expected: Vec<String> = positive.into_iter().chain(negative).collect();
        collected.sort();
        expected.sort();

        prop_assert_eq!(collected, expected);
    }

    /// Property: optional tagging preserves order and length and flags
    /// exactly the cases whose names were given
    #[test]
    fn optional_tagging_flags_exactly_the_named_cases(
        positive in scan_strategy(),
        negative in scan_strategy(),
        mask in prop::collection::vec(any::<bool>(), 32)
    ) {
        let discovery = StubDiscovery { positive, negative };
        let suite = collect_tests_with(&SuiteConfig::default(), &discovery).unwrap();

        let optionals: BTreeSet<String> = suite
            .iter()
            .zip(&mask)
            .filter(|(_, picked)| **picked)
            .map(|(t, _)| t.name.clone())
            .collect();

        let before: Vec<String> = suite.iter().map(|t| t.name.clone()).collect();
        let tagged = apply_optional_tags(suite, &optionals);
        let after: Vec<String> = tagged.iter().map(|t| t.name.clone()).collect();

        prop_assert_eq!(before, after);
        for test in &tagged {
            prop_assert_eq!(test.optional, optionals.contains(&test.name));
        }
    }
}
