//! CLI module for kwdecl
//!
//! This module provides the command-line interface over the declaration vocabulary.
//!
//! ## Commands
//!
//! - `reference [--format markdown|json]` - Render the declaration reference
//! - `resolve [--library NAME] [--scope S] [--doc-format D]` - Resolve declared values like an engine would
//! - `name <IDENT>` - Show the natural keyword name of an identifier
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
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

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

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Keyword and library declaration tooling
#[derive(Parser, Debug)]
#[command(name = "kwdecl")]
#[command(version = VERSION)]
#[command(about = "Keyword and library declaration tooling", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the declaration vocabulary reference
    Reference {
        /// Output format
        #[arg(long, value_enum, default_value_t = ReferenceFormat::Markdown)]
        format: ReferenceFormat,
    },

    /// Resolve declared scope and documentation format values
    Resolve {
        /// Library name used in diagnostics
        #[arg(long, default_value = "<library>")]
        library: String,
        /// Declared scope value
        #[arg(long)]
        scope: Option<String>,
        /// Declared documentation format value
        #[arg(long = "doc-format")]
        doc_format: Option<String>,
    },

    /// Show the natural keyword name of an identifier
    Name {
        /// Function or method identifier
        #[arg(value_name = "IDENT")]
        ident: String,
    },
}

/// Output format of the `reference` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReferenceFormat {
    Markdown,
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
        Command::Reference { format } => commands::reference(format),
        Command::Resolve {
            library,
            scope,
            doc_format,
        } => commands::resolve(&library, scope.as_deref(), doc_format.as_deref()),
        Command::Name { ident } => commands::name(&ident),
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
    fn test_cli_parse_reference_defaults_to_markdown() {
        let cli = Cli::try_parse_from(["kwdecl", "reference"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Reference {
                format: ReferenceFormat::Markdown
            }
        ));
    }

    #[test]
    fn test_cli_parse_reference_json() {
        let cli = Cli::try_parse_from(["kwdecl", "reference", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Reference {
                format: ReferenceFormat::Json
            }
        ));
    }

    #[test]
    fn test_cli_parse_resolve() {
        let cli = Cli::try_parse_from([
            "kwdecl",
            "resolve",
            "--library",
            "Browser",
            "--scope",
            "suite",
            "--doc-format",
            "html",
        ])
        .unwrap();
        if let Command::Resolve {
            library,
            scope,
            doc_format,
        } = cli.command
        {
            assert_eq!(library, "Browser");
            assert_eq!(scope.as_deref(), Some("suite"));
            assert_eq!(doc_format.as_deref(), Some("html"));
        } else {
            panic!("Expected Resolve command");
        }
    }

    #[test]
    fn test_cli_parse_name() {
        let cli = Cli::try_parse_from(["kwdecl", "name", "push_button"]).unwrap();
        assert!(matches!(cli.command, Command::Name { ident } if ident == "push_button"));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["kwdecl"]).is_err());
    }
}
