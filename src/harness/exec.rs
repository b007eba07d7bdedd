//! Subject process launch and stdout capture.
//!
//! Execution is abstracted via [`SubjectExecutor`] so the driver can be
//! tested without spawning real processes, and so alternative execution
//! strategies (resource limits, sandboxing) can slot in later.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::time::Duration;

use subprocess::{Exec, ExitStatus, Redirection};

use super::HarnessError;

/// Captured result of one subject execution.
///
/// Lives only long enough to be judged; nothing persists between fixtures.
#[derive(Debug)]
pub struct CapturedRun {
    pub stdout: String,
    pub status: ExitStatus,
}

/// Launch the subject once against one input file and capture its stdout.
pub trait SubjectExecutor {
    fn execute(&self, subject: &Path, input: &Path) -> Result<CapturedRun, HarnessError>;
}

/// Executor backed by a real child process.
///
/// The subject runs with no arguments, the input file wired to its stdin,
/// and stderr inherited. `timeout` bounds the wait for the subject to
/// terminate; when `None`, the wait blocks indefinitely.
#[derive(Debug, Default)]
pub struct ProcessExecutor {
    timeout: Option<Duration>,
}

impl ProcessExecutor {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl SubjectExecutor for ProcessExecutor {
    fn execute(&self, subject: &Path, input: &Path) -> Result<CapturedRun, HarnessError> {
        let input_file = File::open(input)?;
        // Stdout goes through a scratch file instead of a pipe so the wait
        // below cannot stall on a full pipe buffer.
        let capture = tempfile::tempfile()?;
        let mut readback = capture.try_clone()?;

        tracing::debug!(subject = %subject.display(), input = %input.display(), "launching subject");

        let mut child = Exec::cmd(subject)
            .stdin(Redirection::File(input_file))
            .stdout(Redirection::File(capture))
            .popen()
            .map_err(|source| HarnessError::Launch {
                path: subject.to_path_buf(),
                source,
            })?;

        let status = match self.timeout {
            Some(limit) => match child.wait_timeout(limit)? {
                Some(status) => status,
                None => {
                    child.kill()?;
                    child.wait()?;
                    return Err(HarnessError::Timeout { limit });
                }
            },
            None => child.wait()?,
        };

        readback.seek(SeekFrom::Start(0))?;
        let mut bytes = Vec::new();
        readback.read_to_end(&mut bytes)?;
        let stdout = String::from_utf8(bytes).map_err(|_| HarnessError::InvalidUtf8)?;

        Ok(CapturedRun { stdout, status })
    }
}
