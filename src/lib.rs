#![forbid(unsafe_code)]
//! Verdict — a black-box test harness for stdin/stdout programs.
//!
//! Verdict drives an executable under test against a contiguous sequence of
//! numbered fixture files (`input_1`/`output_1`, `input_2`/`output_2`, ...)
//! and judges each run with a deliberately permissive rule: every line of
//! captured output is compared to the matching expected line as a *set* of
//! integers, so reordering within a line never fails a test.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod harness;

pub use harness::HarnessError;
pub use harness::exec::{CapturedRun, ProcessExecutor, SubjectExecutor};
pub use harness::fixtures::{Fixture, FixtureSequence};
pub use harness::judge::{Verdict, judge};
pub use harness::runner::{ConsoleReporter, Harness, Reporter};
