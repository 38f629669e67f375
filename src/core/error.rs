//! Structural validation errors.

use thiserror::Error;

/// Errors raised when an automaton description violates a structural
/// invariant.
///
/// The checks run in the order the variants are declared; the first
/// violation is reported, carrying the specific offending value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Initial state is not defined")]
    MissingInitialState,

    #[error("Initial state '{0}' does not belong to the automaton's states")]
    UnknownInitialState(String),

    #[error("No final states defined")]
    NoFinalStates,

    #[error("Final state '{0}' does not belong to the automaton's states")]
    UnknownFinalState(String),

    #[error("Transition origin '{0}' does not belong to the automaton's states")]
    UnknownTransitionOrigin(String),

    #[error("Transition symbol '{0}' does not belong to the automaton's alphabet")]
    UnknownTransitionSymbol(String),

    #[error("Transition destination '{0}' does not belong to the automaton's states")]
    UnknownTransitionDestination(String),
}
