//! Parser for the line-oriented automaton description format.
//!
//! A description is UTF-8 text with one directive per line. Lines are
//! trimmed, blank lines are skipped, and tokens are separated by
//! whitespace. The first token of a line is the directive keyword; both
//! the English keywords and the Portuguese ones from the original format
//! are accepted:
//!
//! | keyword | arguments | effect |
//! |---|---|---|
//! | `states` / `estados` | state names | replaces the state set |
//! | `alphabet` / `alfabeto` | symbol names | replaces the alphabet |
//! | `transition` / `transicao` | flat (origin, symbol, destination) triples | registers each triple |
//! | `initial_state` / `estado_inicial` | one state name | replaces the initial state |
//! | `final_states` / `estados_finais` | state names | replaces the final state set |
//!
//! Directives may appear in any order. A repeated directive replaces the
//! earlier value (last write wins), except `transition`, which accumulates;
//! a later triple for the same (origin, symbol) pair overwrites the earlier
//! destination. Anything else is a [`FormatError`].
//!
//! Once every line is consumed the accumulated fields go through
//! [`Automaton::new`], so structural problems surface as
//! [`ValidationError`](crate::core::ValidationError)s — an empty description
//! fails on the missing initial state.

use std::collections::{HashMap, HashSet};

use crate::core::Automaton;

mod error;

pub use error::{FormatError, LoadError};

/// Fields accumulated while walking the description lines.
#[derive(Default)]
struct Description {
    states: HashSet<String>,
    alphabet: HashSet<String>,
    transitions: HashMap<String, HashMap<String, String>>,
    initial_state: Option<String>,
    final_states: HashSet<String>,
}

/// Parse and validate an automaton description.
///
/// # Example
///
/// ```rust
/// use afd::load;
///
/// let automaton = load(
///     "states q0 q1 q2\n\
///      alphabet a b\n\
///      transicao q0 a q1 q1 b q2\n\
///      estado_inicial q0\n\
///      estados_finais q2",
/// )
/// .unwrap();
///
/// assert_eq!(automaton.transition("q1", "b"), Some("q2"));
/// ```
pub fn load(source: &str) -> Result<Automaton, LoadError> {
    let mut description = Description::default();

    for raw in source.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        match keyword {
            "states" | "estados" => {
                description.states = args.iter().map(|s| s.to_string()).collect();
            }
            "alphabet" | "alfabeto" => {
                description.alphabet = args.iter().map(|s| s.to_string()).collect();
            }
            "transition" | "transicao" => {
                // A short trailing group must be an error, never silently
                // dropped.
                if args.len() % 3 != 0 {
                    return Err(FormatError::IncompleteTransition {
                        count: args.len(),
                        line: line.to_string(),
                    }
                    .into());
                }
                for triple in args.chunks_exact(3) {
                    description
                        .transitions
                        .entry(triple[0].to_string())
                        .or_default()
                        .insert(triple[1].to_string(), triple[2].to_string());
                }
            }
            "initial_state" | "estado_inicial" => {
                let [state] = args.as_slice() else {
                    return Err(FormatError::BadArity {
                        directive: keyword.to_string(),
                        line: line.to_string(),
                    }
                    .into());
                };
                description.initial_state = Some(state.to_string());
            }
            "final_states" | "estados_finais" => {
                description.final_states = args.iter().map(|s| s.to_string()).collect();
            }
            _ => {
                return Err(FormatError::UnknownDirective {
                    line: line.to_string(),
                }
                .into());
            }
        }
    }

    Ok(Automaton::new(
        description.states,
        description.alphabet,
        description.transitions,
        description.initial_state,
        description.final_states,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationError;

    const SAMPLE: &str = "states q0 q1 q2\n\
                          alphabet a b\n\
                          transition q0 a q1 q1 b q2\n\
                          initial_state q0\n\
                          final_states q2";

    #[test]
    fn well_formed_description_loads() {
        let automaton = load(SAMPLE).unwrap();
        assert_eq!(automaton.states().len(), 3);
        assert_eq!(automaton.alphabet().len(), 2);
        assert_eq!(automaton.initial_state(), "q0");
        assert_eq!(automaton.transition("q0", "a"), Some("q1"));
        assert_eq!(automaton.transition("q1", "b"), Some("q2"));
        assert!(automaton.is_final_state("q2"));
    }

    #[test]
    fn portuguese_keywords_are_accepted() {
        let automaton = load(
            "estados q0 q1\n\
             alfabeto a\n\
             transicao q0 a q1\n\
             estado_inicial q0\n\
             estados_finais q1",
        )
        .unwrap();
        assert_eq!(automaton.transition("q0", "a"), Some("q1"));
    }

    #[test]
    fn blank_lines_and_padding_are_skipped() {
        let automaton = load(
            "\n  states q0 q1  \n\n\
             alphabet a\n\
             transition q0 a q1\n\
             \t\n\
             initial_state q0\n\
             final_states q1\n\n",
        )
        .unwrap();
        assert_eq!(automaton.initial_state(), "q0");
    }

    #[test]
    fn unknown_directive_is_a_format_error() {
        let err = load("state q0").unwrap_err();
        assert_eq!(
            err,
            LoadError::Format(FormatError::UnknownDirective {
                line: "state q0".to_string(),
            })
        );
    }

    #[test]
    fn short_transition_triple_is_a_format_error() {
        let err = load("transition q0 a q1 q1 b").unwrap_err();
        assert_eq!(
            err,
            LoadError::Format(FormatError::IncompleteTransition {
                count: 5,
                line: "transition q0 a q1 q1 b".to_string(),
            })
        );
    }

    #[test]
    fn initial_state_requires_exactly_one_argument() {
        assert!(matches!(
            load("initial_state").unwrap_err(),
            LoadError::Format(FormatError::BadArity { .. })
        ));
        assert!(matches!(
            load("initial_state q0 q1").unwrap_err(),
            LoadError::Format(FormatError::BadArity { .. })
        ));
    }

    #[test]
    fn empty_description_fails_on_missing_initial_state() {
        let err = load("").unwrap_err();
        assert_eq!(
            err,
            LoadError::Validation(ValidationError::MissingInitialState)
        );
    }

    #[test]
    fn repeated_directives_replace_earlier_values() {
        let automaton = load(
            "states q8 q9\n\
             states q0 q1\n\
             alphabet a\n\
             transition q0 a q1\n\
             initial_state q9\n\
             initial_state q0\n\
             final_states q1",
        )
        .unwrap();
        assert_eq!(automaton.initial_state(), "q0");
        assert!(!automaton.states().contains("q8"));
    }

    #[test]
    fn duplicate_transition_keeps_the_last_destination() {
        let automaton = load(
            "states q0 q1 q2\n\
             alphabet a\n\
             transition q0 a q1 q0 a q2\n\
             initial_state q0\n\
             final_states q2",
        )
        .unwrap();
        assert_eq!(automaton.transition("q0", "a"), Some("q2"));
    }

    #[test]
    fn transitions_accumulate_across_lines() {
        let automaton = load(
            "states q0 q1 q2\n\
             alphabet a b\n\
             transition q0 a q1\n\
             transition q1 b q2\n\
             initial_state q0\n\
             final_states q2",
        )
        .unwrap();
        assert_eq!(automaton.transition("q0", "a"), Some("q1"));
        assert_eq!(automaton.transition("q1", "b"), Some("q2"));
    }

    #[test]
    fn foreign_destination_fails_validation_with_its_name() {
        let err = load(
            "states q0\n\
             alphabet a\n\
             transition q0 a q7\n\
             initial_state q0\n\
             final_states q0",
        )
        .unwrap_err();
        assert_eq!(
            err,
            LoadError::Validation(ValidationError::UnknownTransitionDestination(
                "q7".to_string()
            ))
        );
    }
}
