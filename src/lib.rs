//! afd: a table-driven deterministic finite automaton loader and simulator.
//!
//! The crate reads a line-oriented text description of a DFA, validates its
//! structural consistency, and runs input strings against it. Loading is
//! the only place problems with the machine itself can arise; once an
//! [`Automaton`] exists its invariants hold for good, and simulation is a
//! pure function of the machine and the input.
//!
//! # Core concepts
//!
//! - **Automaton**: the immutable, validated machine record ([`core`])
//! - **Loader**: the description parser with typed format errors ([`loader`])
//! - **Simulator**: pure single-string runs ([`simulator`])
//! - **Batch**: a test-file driver reporting per-case verdicts ([`batch`])
//! - **Snapshot**: versioned JSON persistence ([`snapshot`])
//!
//! # Example
//!
//! ```rust
//! use afd::{load, simulate, SimulationError};
//!
//! let automaton = load(
//!     "states q0 q1 q2\n\
//!      alphabet a b\n\
//!      transition q0 a q1 q1 b q2\n\
//!      initial_state q0\n\
//!      final_states q2",
//! )
//! .unwrap();
//!
//! // The simulator reports the terminal state; acceptance is the caller's
//! // check against the final states.
//! let outcome = simulate(&automaton, "ab").unwrap();
//! assert_eq!(outcome.end_state(), Some("q2"));
//! assert!(automaton.is_final_state("q2"));
//!
//! // An undefined transition is a rejection, not an error.
//! let outcome = simulate(&automaton, "aa").unwrap();
//! assert_eq!(outcome.end_state(), None);
//!
//! // A symbol outside the alphabet is an error, not a rejection.
//! let err = simulate(&automaton, "x").unwrap_err();
//! assert_eq!(err, SimulationError::UnknownSymbol { symbol: 'x', position: 0 });
//! ```

pub mod batch;
pub mod core;
pub mod loader;
pub mod simulator;
pub mod snapshot;

// Re-export commonly used types
pub use batch::{run_cases, BatchError, BatchReport, CaseReport, Expectation, Verdict};
pub use core::{Automaton, ValidationError};
pub use loader::{load, FormatError, LoadError};
pub use simulator::{simulate, Outcome, SimulationError};
pub use snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
