//! Simulation errors.

use thiserror::Error;

/// Errors that can occur while simulating one input string.
///
/// Fatal to that simulation call only; the automaton itself is read-only
/// and unaffected. An undefined transition is not an error, it is the
/// ordinary rejection outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("Symbol '{symbol}' at position {position} does not belong to the automaton's alphabet")]
    UnknownSymbol { symbol: char, position: usize },
}
