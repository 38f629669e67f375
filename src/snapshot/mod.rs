//! Versioned JSON persistence for validated automata.
//!
//! This module lets tooling cache a loaded automaton and restore it later
//! without re-parsing the text description. Restoring re-runs structural
//! validation (the automaton's deserialization goes through the same checks
//! as construction), so a hand-edited snapshot cannot produce an invalid
//! machine.

use serde::{Deserialize, Serialize};

use crate::core::Automaton;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable envelope around a validated automaton.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// The machine itself
    pub automaton: Automaton,
}

impl Snapshot {
    /// Wrap an automaton in a current-version envelope.
    pub fn of(automaton: &Automaton) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            automaton: automaton.clone(),
        }
    }

    /// Serialize the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Restore a snapshot from JSON.
    ///
    /// The version gate runs before the automaton is even looked at, so an
    /// envelope from a future format version fails with
    /// [`SnapshotError::UnsupportedVersion`] rather than a confusing parse
    /// error.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        #[derive(Deserialize)]
        struct Envelope {
            version: u32,
            automaton: serde_json::Value,
        }

        let envelope: Envelope = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;

        if envelope.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: envelope.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let automaton: Automaton = serde_json::from_value(envelope.automaton)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;

        Ok(Self {
            version: envelope.version,
            automaton,
        })
    }
}
