//! Pure simulation of input strings against a loaded automaton.
//!
//! [`simulate`] is a pure function of the automaton and the input: no
//! shared state, no mutation, and the same arguments always produce the
//! same result. Concurrent runs against one automaton are safe because the
//! automaton is only ever read.

use serde::{Deserialize, Serialize};

use crate::core::Automaton;

mod error;

pub use error::SimulationError;

/// How a run over an input string ended.
///
/// Deciding acceptance is the caller's job: compare [`Outcome::end_state`]
/// against the automaton's final states, treating `None` as always
/// rejecting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The input was fully consumed; the machine stopped in this state.
    Halted { state: String },

    /// The machine was in `state` with no transition defined for `symbol`;
    /// the rest of the input was not examined. This is the ordinary
    /// rejection outcome, not an error, and is never confusable with a
    /// real state name.
    Rejected {
        state: String,
        symbol: char,
        position: usize,
    },
}

impl Outcome {
    /// The terminal state, or `None` when the run hit an undefined
    /// transition.
    pub fn end_state(&self) -> Option<&str> {
        match self {
            Self::Halted { state } => Some(state),
            Self::Rejected { .. } => None,
        }
    }
}

/// Run `input` through `automaton`, one character per step.
///
/// Starts at the initial state and follows the transition table. A symbol
/// outside the alphabet aborts the whole call with
/// [`SimulationError::UnknownSymbol`]; an undefined transition ends the run
/// with [`Outcome::Rejected`]. An empty input halts immediately in the
/// initial state. Positions are character offsets into `input`.
///
/// # Example
///
/// ```rust
/// use afd::{load, simulate};
///
/// let automaton = load(
///     "states q0 q1\n\
///      alphabet a\n\
///      transition q0 a q1\n\
///      initial_state q0\n\
///      final_states q1",
/// )
/// .unwrap();
///
/// let outcome = simulate(&automaton, "a").unwrap();
/// assert_eq!(outcome.end_state(), Some("q1"));
/// ```
pub fn simulate(automaton: &Automaton, input: &str) -> Result<Outcome, SimulationError> {
    let mut current = automaton.initial_state();

    for (position, symbol) in input.chars().enumerate() {
        let key = symbol.to_string();
        if !automaton.alphabet().contains(&key) {
            return Err(SimulationError::UnknownSymbol { symbol, position });
        }

        match automaton.transition(current, &key) {
            Some(next) => current = next,
            None => {
                return Ok(Outcome::Rejected {
                    state: current.to_string(),
                    symbol,
                    position,
                })
            }
        }
    }

    Ok(Outcome::Halted {
        state: current.to_string(),
    })
}
