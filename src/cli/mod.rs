//! CLI for the verdict harness
//!
//! ## Invocation
//!
//! `verdict <SUBJECT> [TEST_DIR] [--timeout <SECS>]`
//!
//! The test directory is resolved by joining the required `SOURCE_ROOT`
//! environment variable with `TEST_DIR` (default: `tests/open_tests`).
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. The
//! environment is read here and nowhere else; the harness itself is built
//! from explicit paths. Command functions return `CliResult<ExitCode>`
//! instead of calling `process::exit` - only the top-level `run()` handles
//! errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use crate::harness::HarnessError;
use crate::harness::exec::ProcessExecutor;
use crate::harness::runner::{ConsoleReporter, Harness};

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

/// Environment variable naming the root that test directories are resolved
/// against.
pub const SOURCE_ROOT_ENV: &str = "SOURCE_ROOT";

/// Default test directory, relative to the source root.
pub const DEFAULT_TEST_DIR: &str = "tests/open_tests";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Black-box fixture test harness
#[derive(Parser, Debug)]
#[command(name = "verdict")]
#[command(version = VERSION)]
#[command(about = "Run an executable against numbered fixtures and judge its output", long_about = None)]
pub struct Cli {
    /// Path to the executable under test
    #[arg(value_name = "SUBJECT")]
    pub subject: PathBuf,

    /// Test directory, relative to $SOURCE_ROOT
    #[arg(value_name = "TEST_DIR")]
    pub test_dir: Option<PathBuf>,

    /// Kill the subject if a single run exceeds this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. `execute()`
/// returns `CliResult` and errors are handled here.
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

/// Execute the harness run and map its outcome to an exit code.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let root = env::var_os(SOURCE_ROOT_ENV).ok_or_else(|| {
        CliError::failure(format!(
            "{SOURCE_ROOT_ENV} is not set; it must name the directory test paths are resolved against"
        ))
    })?;

    let test_dir = PathBuf::from(root).join(cli.test_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_TEST_DIR)));
    let executor = ProcessExecutor::new(cli.timeout.map(Duration::from_secs));
    let harness = Harness::new(cli.subject, test_dir, executor);

    match harness.run(&mut ConsoleReporter) {
        Ok(_passed) => Ok(ExitCode::SUCCESS),
        // An ordinary test failure: the progress lines already name the
        // fixture, and the verdict is the exit code.
        Err(HarnessError::Mismatch { .. } | HarnessError::SubjectFailed { .. }) => {
            Err(CliError::new("", ExitCode::FAILURE))
        }
        Err(e) => Err(CliError::failure(e.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
