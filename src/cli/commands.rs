//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde_json::json;

use crate::suite::case::TestCase;
use crate::suite::collect::{apply_optional_tags, collect_tests};
use crate::suite::config::SuiteConfig;

use super::{CliError, CliResult, ExitCode, ListFormat};

/// Options for the `list` command.
pub struct ListOptions {
    pub root: PathBuf,
    pub positive: PathBuf,
    pub negative: PathBuf,
    pub extension: Option<String>,
    pub filter: Option<String>,
    pub optionals: Vec<String>,
    pub format: ListFormat,
    pub verbose: bool,
}

/// Collect the suite and print it.
pub fn list_suite(options: ListOptions) -> CliResult<ExitCode> {
    let ListOptions {
        root,
        positive,
        negative,
        extension,
        filter,
        optionals,
        format,
        verbose,
    } = options;

    let config = SuiteConfig {
        root,
        positive_dir: positive,
        negative_dir: negative,
        case_extension: extension,
    };
    let optionals: BTreeSet<String> = optionals.into_iter().collect();

    let tests = collect_tests(&config).map_err(|e| CliError::failure(e.to_string()))?;
    let tests = apply_optional_tags(tests, &optionals);

    let tests: Vec<TestCase> = match filter.as_deref() {
        Some(keyword) => tests.into_iter().filter(|t| t.name.contains(keyword)).collect(),
        None => tests,
    };

    match format {
        ListFormat::Human => print_human(&tests, verbose),
        ListFormat::Json => print_json(&tests)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn print_human(tests: &[TestCase], verbose: bool) {
    if tests.is_empty() {
        eprintln!("No tests collected");
        return;
    }

    println!("collected {} item(s)", tests.len());

    for test in tests {
        let optional = if test.optional { " (optional)" } else { "" };
        if verbose {
            println!(
                "{} [{}]{} {}",
                test.name,
                test.expectation,
                optional,
                test.path.display()
            );
        } else {
            println!("{}{}", test.name, optional);
        }
    }
}

fn print_json(tests: &[TestCase]) -> CliResult<()> {
    let items: Vec<serde_json::Value> = tests
        .iter()
        .map(|test| {
            json!({
                "name": test.name,
                "path": test.path.to_string_lossy(),
                "expectation": test.expectation.as_str(),
                "optional": test.optional,
            })
        })
        .collect();

    let output = serde_json::to_string_pretty(&items)
        .map_err(|e| CliError::failure(format!("Failed to serialize listing: {}", e)))?;
    println!("{}", output);
    Ok(())
}
