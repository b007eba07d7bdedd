//! Fixture discovery, subject execution, and output judging.
//!
//! ## Modules
//!
//! - `fixtures` - Numbered fixture pairs and contiguous discovery
//! - `exec` - Subject process launch and stdout capture
//! - `judge` - Per-line token-set comparison
//! - `runner` - Sequential driver tying the stages together
//!
//! ## Design
//!
//! The driver is constructed from explicit paths; reading the process
//! environment happens only at the CLI boundary. Execution is abstracted
//! behind [`exec::SubjectExecutor`] so the driver can be exercised without
//! spawning real processes, and the timeout policy is an explicit field of
//! the default executor rather than a hardcoded unbounded wait.

pub mod exec;
pub mod fixtures;
pub mod judge;
pub mod runner;

use std::path::PathBuf;
use std::time::Duration;

use subprocess::{ExitStatus, PopenError};
use thiserror::Error;

/// Errors that abort a harness run.
///
/// Every variant is terminal: the first failure of any kind halts the
/// remaining fixture sequence. `MalformedToken` is kept distinct from
/// `Mismatch` - a non-integer token means the fixture data or subject
/// output violates the harness's data contract, not that the subject
/// produced a wrong answer.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to launch subject '{}': {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: PopenError,
    },

    #[error("failed waiting for subject: {0}")]
    Wait(#[from] PopenError),

    #[error("subject exceeded the {limit:?} time limit and was killed")]
    Timeout { limit: Duration },

    #[error("subject stdout was not valid UTF-8")]
    InvalidUtf8,

    #[error("subject exited with {status:?} on fixture input_{index}")]
    SubjectFailed { index: u32, status: ExitStatus },

    #[error("fixture {index}: expected output '{}' is missing or unreadable: {source}", .path.display())]
    MissingExpected {
        index: u32,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output mismatch on fixture input_{index}")]
    Mismatch { index: u32 },

    #[error("malformed fixture data: token '{token}' is not an integer")]
    MalformedToken { token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
