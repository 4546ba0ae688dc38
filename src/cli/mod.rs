//! CLI module for sharpkind
//!
//! This module provides the command-line interface over the syntax kind vocabulary.
//!
//! ## Commands
//!
//! - `classify <SPELLING>...` - Keyword / preprocessor / punctuation / pseudo-keyword resolution
//! - `text <KIND>...` - Canonical spelling of kinds (by name or discriminant)
//! - `operators <KIND>` - Every expression kind a token derives
//! - `metadata <NAME>` - Operator metadata name lookup (`op_Addition`)
//! - `list <SET>` - Enumerate a kind set
//! - `check` - Validate the kind space invariants
//! - `reference` - Generate the Markdown reference
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<String>` (the text to print) instead of printing or calling
//! `process::exit`. Only the top-level `run()` function prints and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use crate::report::{OutputFormat, ReportConfig};
use crate::version::SHARPKIND_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Invalid arguments that clap could not catch (unknown kind names, metadata names).
    pub const USAGE: ExitCode = ExitCode(2);
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

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
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

/// Inspect the sharpkind syntax kind vocabulary
#[derive(Parser, Debug)]
#[command(name = "sharpkind")]
#[command(version = SHARPKIND_VERSION)]
#[command(about = "Inspect the sharpkind syntax kind vocabulary", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Accept and show canonical spellings only (no Chinese synonyms)
    #[arg(long = "no-synonyms", global = true)]
    pub no_synonyms: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify spellings as keywords, directive keywords, punctuation, or pseudo-keywords
    Classify {
        /// Spellings to classify
        #[arg(value_name = "SPELLING", required = true)]
        spellings: Vec<String>,
    },

    /// Print the canonical text of kinds
    Text {
        /// Kind names (`PlusEqualsToken`) or discriminants (`135`)
        #[arg(value_name = "KIND", required = true)]
        kinds: Vec<String>,
    },

    /// Show every expression kind a token derives, and whether it is overloadable
    Operators {
        /// Token kind name or discriminant
        #[arg(value_name = "KIND")]
        kind: String,
    },

    /// Resolve an operator metadata name such as `op_Addition`
    Metadata {
        /// Metadata name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Enumerate a set of kinds in ascending order
    List {
        /// Which set to list
        #[arg(value_enum, value_name = "SET")]
        set: KindSet,
    },

    /// Validate the kind space invariants
    Check,

    /// Generate the Markdown syntax kind reference
    Reference {
        /// Write to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        /// Heading level of the document title
        #[arg(long, value_name = "LEVEL", default_value_t = 1)]
        heading_level: usize,
    },
}

/// Enumerable kind sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindSet {
    Reserved,
    Contextual,
    Keywords,
    Punctuation,
    Preprocessor,
}

impl Cli {
    /// Report configuration from the global flags.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_format(self.format)
            .with_synonyms(!self.no_synonyms)
    }
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
    if let Err(err) = sharpkind_core::warm_up() {
        tracing::error!(%err, "continuing with an inconsistent kind space; `sharpkind check` shows the full report");
    }

    match execute(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output.trim_end_matches('\n'));
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message.trim_end_matches('\n'));
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return its output.
pub fn execute(cli: Cli) -> CliResult<String> {
    let config = cli.report_config();
    match cli.command {
        Command::Classify { spellings } => commands::classify(&spellings, &config),
        Command::Text { kinds } => commands::text(&kinds, &config),
        Command::Operators { kind } => commands::operators(&kind, &config),
        Command::Metadata { name } => commands::metadata(&name, &config),
        Command::List { set } => commands::list(set, &config),
        Command::Check => commands::check(&config),
        Command::Reference { out, heading_level } => {
            let config = config.with_heading_level(heading_level);
            commands::reference(out.as_deref(), &config)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_classify() {
        let cli = Cli::try_parse_from(["sharpkind", "classify", "class", "类"]).unwrap();
        if let Command::Classify { spellings } = cli.command {
            assert_eq!(spellings, vec!["class", "类"]);
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn test_cli_parse_classify_requires_spelling() {
        assert!(Cli::try_parse_from(["sharpkind", "classify"]).is_err());
    }

    #[test]
    fn test_cli_parse_text() {
        let cli = Cli::try_parse_from(["sharpkind", "text", "PlusEqualsToken", "135"]).unwrap();
        assert!(matches!(cli.command, Command::Text { .. }));
    }

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::try_parse_from(["sharpkind", "list", "preprocessor"]).unwrap();
        if let Command::List { set } = cli.command {
            assert_eq!(set, KindSet::Preprocessor);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_parse_list_rejects_unknown_set() {
        assert!(Cli::try_parse_from(["sharpkind", "list", "operators"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sharpkind", "list", "keywords", "--format", "json", "--no-synonyms"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_synonyms);
        let config = cli.report_config();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.include_synonyms);
    }

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["sharpkind", "check"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.no_synonyms);
        assert!(matches!(cli.command, Command::Check));
    }

    #[test]
    fn test_cli_parse_reference() {
        let cli = Cli::try_parse_from(["sharpkind", "reference", "--out", "docs/kinds.md", "--heading-level", "2"]).unwrap();
        if let Command::Reference { out, heading_level } = cli.command {
            assert_eq!(out, Some(PathBuf::from("docs/kinds.md")));
            assert_eq!(heading_level, 2);
        } else {
            panic!("Expected Reference command");
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["sharpkind"]).is_err());
    }

    #[test]
    fn test_cli_error_codes() {
        assert_eq!(CliError::failure("x").exit_code, ExitCode::FAILURE);
        assert_eq!(CliError::usage("x").exit_code, ExitCode::USAGE);
        assert_eq!(CliError::with_code("x", 3).exit_code, ExitCode(3));
        assert_eq!(CliError::failure("boom").to_string(), "boom");
    }

    #[test]
    fn test_execute_check_succeeds() {
        let cli = Cli::try_parse_from(["sharpkind", "check"]).unwrap();
        let out = execute(cli).unwrap();
        assert!(out.starts_with("kind space OK"));
    }
}
