//! Per-line token-set comparison of captured output against expected output.
//!
//! The rule is deliberately loose: each line is reduced to the *set* of
//! integers it contains, so duplicates and ordering within a line never
//! matter. The match test is asymmetric - every captured token must appear
//! in the expected line, while expected tokens with no captured counterpart
//! are tolerated. This lets a subject emit unordered (and even partial)
//! result sets without failing.

use std::collections::HashSet;
use std::io::BufRead;

use super::HarnessError;

/// Outcome of judging one fixture's captured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

/// Build the set of integers on one line.
fn token_set(line: &str) -> Result<HashSet<i64>, HarnessError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| HarnessError::MalformedToken {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Compare captured output against expected lines read from `expected`.
///
/// `captured` must already have its single trailing newline stripped; it is
/// split on `'\n'` and paired line-by-line with sequential reads from the
/// expected side. Once the expected reader is exhausted, every further step
/// reads as an empty line. A pair where either side is empty matches
/// vacuously, without tokenizing. Trailing unread expected lines are
/// ignored.
///
/// A token that does not parse as an integer - on either side - aborts the
/// whole run with [`HarnessError::MalformedToken`] rather than producing a
/// [`Verdict::Fail`].
pub fn judge<R: BufRead>(captured: &str, expected: R) -> Result<Verdict, HarnessError> {
    let mut expected_lines = expected.lines();

    for line in captured.split('\n') {
        let expected_line = match expected_lines.next() {
            Some(next) => next?,
            None => String::new(),
        };

        if line.is_empty() || expected_line.is_empty() {
            continue;
        }

        let captured_set = token_set(line)?;
        let expected_set = token_set(&expected_line)?;
        if !captured_set.is_subset(&expected_set) {
            return Ok(Verdict::Fail);
        }
    }

    Ok(Verdict::Pass)
}
