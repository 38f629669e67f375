//! The automaton value type and its structural validation.
//!
//! This module contains the pure core of the crate:
//! - The immutable [`Automaton`] record
//! - Structural validation via [`Automaton::new`]
//!
//! An `Automaton` value always satisfies its invariants; every way of
//! constructing one, including deserialization, goes through validation.

mod automaton;
mod error;

pub use automaton::Automaton;
pub use error::ValidationError;
