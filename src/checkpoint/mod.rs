//! Checkpoint and resume of a machine's current state.
//!
//! Control loops that persist their state across resets capture a
//! [`Checkpoint`], store it in JSON or a compact binary form, and restore it
//! into a machine bound to the same table after reboot. Tables hold function
//! pointers and are never serialized; only the state and a length check
//! against the table travel with the checkpoint.

use crate::core::StateId;
use crate::engine::Machine;
use crate::table::live_len;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Current state of the machine
    pub state: StateId,

    /// Number of transitions before the end-of-table sentinel
    pub transitions: usize,
}

impl Checkpoint {
    /// Snapshot the current state of `machine`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tablefsm::checkpoint::Checkpoint;
    /// use tablefsm::core::{Guard, Transition};
    /// use tablefsm::engine::{Machine, SimpleFsm};
    ///
    /// fn always(_: &SimpleFsm<'_>) -> bool {
    ///     true
    /// }
    ///
    /// let table = [Transition::new(0, Guard::new(always), 1, None), Transition::END];
    ///
    /// let mut running = SimpleFsm::new(&table).unwrap();
    /// running.fire();
    /// let saved = Checkpoint::capture(&running).to_json().unwrap();
    ///
    /// let mut rebooted = SimpleFsm::new(&table).unwrap();
    /// Checkpoint::from_json(&saved).unwrap().restore(&mut rebooted).unwrap();
    /// assert_eq!(rebooted.state(), 1);
    /// ```
    pub fn capture<'t, M: Machine<'t>>(machine: &M) -> Self {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state: machine.state(),
            transitions: live_len(machine.fsm().table()),
        }
    }

    /// Put the captured state back into `machine`.
    ///
    /// The machine must be bound to a table with the same number of live
    /// transitions as the one the checkpoint was taken from.
    pub fn restore<'t, M: Machine<'t>>(&self, machine: &mut M) -> Result<(), CheckpointError> {
        self.check_version()?;

        let found = live_len(machine.fsm().table());
        if found != self.transitions {
            return Err(CheckpointError::TableMismatch {
                expected: self.transitions,
                found,
            });
        }

        tracing::debug!("Restoring checkpoint {} into state {}", self.id, self.state);
        machine.set_state(self.state);
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Checkpoint = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Checkpoint = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}
