//! Batch run errors.

use thiserror::Error;

/// Errors raised while parsing a batch case file.
///
/// A malformed case line is fatal to the whole run; a case whose input
/// merely uses a symbol outside the alphabet is not, it fails that case
/// alone (see [`Verdict::Error`](crate::batch::Verdict)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("Malformed test case on line {line_no}, expected input and expectation: {line}")]
    MalformedCase { line_no: usize, line: String },
}
