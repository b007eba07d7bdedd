//! Sequential driver: discover, execute, judge, repeat.
//!
//! ## Reporter Trait
//!
//! The driver uses a [`Reporter`] trait to separate progress output from
//! orchestration. Progress carries no semantic weight - the run's outcome
//! is its return value - so tests silence it and custom frontends can
//! reformat it.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use super::HarnessError;
use super::exec::{ProcessExecutor, SubjectExecutor};
use super::fixtures::FixtureSequence;
use super::judge::{Verdict, judge};

// ============================================================================
// Reporter Trait
// ============================================================================

/// Trait for reporting harness progress.
pub trait Reporter {
    /// Called before a fixture's subject run starts.
    fn on_fixture_start(&mut self, _index: u32) {}

    /// Called after the subject exits cleanly, before judging.
    fn on_judging_start(&mut self, _index: u32) {}

    /// Called when discovery runs out of inputs and every fixture passed.
    fn on_run_complete(&mut self, _passed: u32) {}
}

/// Default console reporter.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn on_fixture_start(&mut self, index: u32) {
        println!(">> Testing input_{index}");
    }

    fn on_judging_start(&mut self, _index: u32) {
        println!(">>>> Analyzing output...");
    }
}

// ============================================================================
// Harness driver
// ============================================================================

/// Sequential driver for one harness run.
///
/// Built from explicit paths - resolving the test directory against the
/// environment happens at the CLI boundary, never here.
pub struct Harness<E = ProcessExecutor> {
    subject: PathBuf,
    test_dir: PathBuf,
    executor: E,
}

impl<E: SubjectExecutor> Harness<E> {
    pub fn new(subject: impl Into<PathBuf>, test_dir: impl Into<PathBuf>, executor: E) -> Self {
        Self {
            subject: subject.into(),
            test_dir: test_dir.into(),
            executor,
        }
    }

    /// Run every discovered fixture in order, stopping at the first failure.
    ///
    /// Per fixture: execute the subject with the input file on stdin, require
    /// exit status zero, strip one trailing newline from the captured stdout,
    /// and judge it against the expected-output file. Returns the number of
    /// fixtures that passed once discovery runs out of inputs. The first
    /// failure of any kind aborts the remaining sequence; a fixture whose
    /// subject run fails is never judged.
    #[tracing::instrument(skip_all, fields(test_dir = %self.test_dir.display()))]
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<u32, HarnessError> {
        let mut passed = 0;

        for fixture in FixtureSequence::new(&self.test_dir) {
            reporter.on_fixture_start(fixture.index);

            let run = self.executor.execute(&self.subject, &fixture.input)?;
            if !run.status.success() {
                return Err(HarnessError::SubjectFailed {
                    index: fixture.index,
                    status: run.status,
                });
            }

            reporter.on_judging_start(fixture.index);

            let expected = File::open(&fixture.expected).map_err(|source| {
                HarnessError::MissingExpected {
                    index: fixture.index,
                    path: fixture.expected.clone(),
                    source,
                }
            })?;

            let stdout = strip_trailing_newline(&run.stdout);
            match judge(stdout, BufReader::new(expected))? {
                Verdict::Pass => passed += 1,
                Verdict::Fail => return Err(HarnessError::Mismatch { index: fixture.index }),
            }
        }

        tracing::debug!(passed, "fixture sequence exhausted");
        reporter.on_run_complete(passed);
        Ok(passed)
    }
}

/// Strip exactly one trailing newline, if present.
fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}
