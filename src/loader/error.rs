//! Loading errors for the description format.

use thiserror::Error;

use crate::core::ValidationError;

/// Errors raised by malformed description lines.
///
/// Each variant carries the offending line verbatim so the caller can point
/// at the exact spot in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Unknown directive in automaton description line: {line}")]
    UnknownDirective { line: String },

    #[error(
        "Transition arguments must form (origin, symbol, destination) triples, \
         got {count} token(s): {line}"
    )]
    IncompleteTransition { count: usize, line: String },

    #[error("Directive '{directive}' takes exactly one argument: {line}")]
    BadArity { directive: String, line: String },
}

/// Any way loading a description can fail: the text itself is malformed, or
/// the described machine is structurally inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
