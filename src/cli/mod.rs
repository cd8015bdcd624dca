//! CLI module for the corpus tooling
//!
//! This module provides the command-line interface for suite collection.
//!
//! ## Commands
//!
//! - `list [ROOT]` - Collect the suite and print it
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use crate::version::SEMA_CORPUS_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Test-suite collection for semantic-analysis corpora
#[derive(Parser, Debug)]
#[command(name = "sema-corpus")]
#[command(version = SEMA_CORPUS_VERSION)]
#[command(about = "Collect semantic-analysis test suites from corpus directories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect the suite and print it
    List {
        /// Corpus root directory
        #[arg(value_name = "ROOT", default_value = ".")]
        root: PathBuf,
        /// Positive-case subtree, relative to the root
        #[arg(long, value_name = "DIR", default_value = "sema/positive")]
        positive: PathBuf,
        /// Negative-case subtree, relative to the root
        #[arg(long, value_name = "DIR", default_value = "sema/negative")]
        negative: PathBuf,
        /// Only count files with this extension as cases
        #[arg(long = "ext", value_name = "EXT")]
        extension: Option<String>,
        /// Keep only cases whose name contains this keyword
        #[arg(short = 'k', long, value_name = "KEYWORD")]
        filter: Option<String>,
        /// Mark the named case as optional (repeatable)
        #[arg(long = "optional", value_name = "NAME")]
        optionals: Vec<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: ListFormat,
        /// Show case paths and expectations
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Output format for `list`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Human,
    Json,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::List {
            root,
            positive,
            negative,
            extension,
            filter,
            optionals,
            format,
            verbose,
        } => commands::list_suite(commands::ListOptions {
            root,
            positive,
            negative,
            extension,
            filter,
            optionals,
            format,
            verbose,
        }),
    }
}
