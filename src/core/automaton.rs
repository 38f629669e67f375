//! The validated deterministic finite automaton record.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::error::ValidationError;

/// A validated deterministic finite automaton.
///
/// Values of this type are immutable and always satisfy the structural
/// invariants below, enforced by [`Automaton::new`] in this order:
///
/// 1. the initial state is defined and declared in `states`
/// 2. the final state set is non-empty and a subset of `states`
/// 3. every transition origin is declared in `states`
/// 4. every transition symbol is declared in `alphabet`
/// 5. every transition destination is declared in `states`
///
/// The transition table is a partial function stored as a nested
/// `state → symbol → state` map. A missing entry means the machine has
/// nowhere to go on that symbol, which a simulation reports as rejection;
/// missing entries are never backfilled with a placeholder state.
///
/// Deserialization routes through the same validation, so an invalid
/// automaton can never be materialized from serialized data.
///
/// # Example
///
/// ```rust
/// use afd::Automaton;
/// use std::collections::{HashMap, HashSet};
///
/// let states: HashSet<String> = ["q0", "q1"].iter().map(|s| s.to_string()).collect();
/// let alphabet: HashSet<String> = ["a"].iter().map(|s| s.to_string()).collect();
/// let mut transitions: HashMap<String, HashMap<String, String>> = HashMap::new();
/// transitions
///     .entry("q0".to_string())
///     .or_default()
///     .insert("a".to_string(), "q1".to_string());
/// let finals: HashSet<String> = ["q1"].iter().map(|s| s.to_string()).collect();
///
/// let automaton =
///     Automaton::new(states, alphabet, transitions, Some("q0".to_string()), finals).unwrap();
///
/// assert_eq!(automaton.initial_state(), "q0");
/// assert_eq!(automaton.transition("q0", "a"), Some("q1"));
/// assert!(automaton.is_final_state("q1"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAutomaton")]
pub struct Automaton {
    states: HashSet<String>,
    alphabet: HashSet<String>,
    transitions: HashMap<String, HashMap<String, String>>,
    initial_state: String,
    final_states: HashSet<String>,
}

/// Unvalidated mirror of [`Automaton`] used as the deserialization target.
#[derive(Deserialize)]
struct RawAutomaton {
    states: HashSet<String>,
    alphabet: HashSet<String>,
    transitions: HashMap<String, HashMap<String, String>>,
    initial_state: String,
    final_states: HashSet<String>,
}

impl TryFrom<RawAutomaton> for Automaton {
    type Error = ValidationError;

    fn try_from(raw: RawAutomaton) -> Result<Self, Self::Error> {
        Automaton::new(
            raw.states,
            raw.alphabet,
            raw.transitions,
            Some(raw.initial_state),
            raw.final_states,
        )
    }
}

impl Automaton {
    /// Validate the parts of an automaton and assemble the record.
    ///
    /// `initial_state` is optional so that a description that never defined
    /// one fails here, with [`ValidationError::MissingInitialState`], like
    /// every other structural problem. The invariants are checked strictly
    /// in order; the first violation wins.
    pub fn new(
        states: HashSet<String>,
        alphabet: HashSet<String>,
        transitions: HashMap<String, HashMap<String, String>>,
        initial_state: Option<String>,
        final_states: HashSet<String>,
    ) -> Result<Self, ValidationError> {
        let initial_state = initial_state.ok_or(ValidationError::MissingInitialState)?;
        if !states.contains(&initial_state) {
            return Err(ValidationError::UnknownInitialState(initial_state));
        }

        if final_states.is_empty() {
            return Err(ValidationError::NoFinalStates);
        }
        if let Some(unknown) = final_states.iter().find(|s| !states.contains(*s)) {
            return Err(ValidationError::UnknownFinalState(unknown.clone()));
        }

        if let Some(origin) = transitions.keys().find(|s| !states.contains(*s)) {
            return Err(ValidationError::UnknownTransitionOrigin(origin.clone()));
        }
        if let Some(symbol) = transitions
            .values()
            .flat_map(|by_symbol| by_symbol.keys())
            .find(|sym| !alphabet.contains(*sym))
        {
            return Err(ValidationError::UnknownTransitionSymbol(symbol.clone()));
        }
        if let Some(destination) = transitions
            .values()
            .flat_map(|by_symbol| by_symbol.values())
            .find(|s| !states.contains(*s))
        {
            return Err(ValidationError::UnknownTransitionDestination(
                destination.clone(),
            ));
        }

        Ok(Self {
            states,
            alphabet,
            transitions,
            initial_state,
            final_states,
        })
    }

    /// The declared state set.
    pub fn states(&self) -> &HashSet<String> {
        &self.states
    }

    /// The declared alphabet.
    pub fn alphabet(&self) -> &HashSet<String> {
        &self.alphabet
    }

    /// The state the machine starts in.
    pub fn initial_state(&self) -> &str {
        &self.initial_state
    }

    /// The accepting states.
    pub fn final_states(&self) -> &HashSet<String> {
        &self.final_states
    }

    /// Look up the transition for `(state, symbol)`.
    ///
    /// `None` means the transition is undefined, the machine's ordinary
    /// way of rejecting an input.
    pub fn transition(&self, state: &str, symbol: &str) -> Option<&str> {
        self.transitions
            .get(state)
            .and_then(|by_symbol| by_symbol.get(symbol))
            .map(String::as_str)
    }

    /// Check whether `state` is an accepting state.
    pub fn is_final_state(&self, state: &str) -> bool {
        self.final_states.contains(state)
    }
}
