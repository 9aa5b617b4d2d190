//! CLI module for the Quill frontend
//!
//! ## Commands
//!
//! - `outline <file>` - Print the block outline of a source file
//! - `params <text>` / `params --file <file>` - Parse a parameter list and print each parameter's kind
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

use clap::{Parser, Subcommand};
use quill_syntax::ArgumentListConfig;

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

/// The Quill programming language frontend
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(version = VERSION)]
#[command(about = "The Quill programming language frontend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the block outline of a source file
    Outline {
        /// Source file to outline
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a parameter list and print each parameter's kind
    Params {
        /// Parameter list source, e.g. "a, /, b, *, c"
        #[arg(value_name = "TEXT", required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,
        /// Read the parameter list from a file
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
        /// Do not parse `: annotation` after a name
        #[arg(long)]
        no_annotations: bool,
        /// Do not parse `= initializer` after a name
        #[arg(long)]
        no_initializers: bool,
    },
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
        Command::Outline { file } => commands::outline_file(&file),
        Command::Params {
            text,
            file,
            no_annotations,
            no_initializers,
        } => {
            let config = ArgumentListConfig::new()
                .with_annotations(!no_annotations)
                .with_initializers(!no_initializers);
            commands::params(text.as_deref(), file.as_deref(), &config)
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
    fn test_cli_parse_outline() {
        let cli = Cli::try_parse_from(["quill", "outline", "main.qu"]).unwrap();
        assert!(matches!(cli.command, Command::Outline { .. }));
    }

    #[test]
    fn test_cli_parse_params_text() {
        let cli = Cli::try_parse_from(["quill", "params", "a, *, b"]).unwrap();
        if let Command::Params { text, file, .. } = cli.command {
            assert_eq!(text.as_deref(), Some("a, *, b"));
            assert!(file.is_none());
        } else {
            panic!("Expected Params command");
        }
    }

    #[test]
    fn test_cli_parse_params_flags() {
        let cli = Cli::try_parse_from(["quill", "params", "--file", "sig.txt", "--no-annotations"]).unwrap();
        if let Command::Params {
            file,
            no_annotations,
            no_initializers,
            ..
        } = cli.command
        {
            assert_eq!(file, Some(PathBuf::from("sig.txt")));
            assert!(no_annotations);
            assert!(!no_initializers);
        } else {
            panic!("Expected Params command");
        }
    }

    #[test]
    fn test_cli_params_requires_input() {
        assert!(Cli::try_parse_from(["quill", "params"]).is_err());
        assert!(Cli::try_parse_from(["quill", "params", "a", "--file", "x"]).is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["quill"]).is_err());
    }

    #[test]
    fn test_cli_error_failure_code() {
        let err = CliError::failure("boom");
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert_eq!(err.to_string(), "boom");
    }
}
