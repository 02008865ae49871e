use serde::{Deserialize, Serialize};

use vendsim_core::MachineId;

/// Envelope for an event, containing machine + stream metadata.
///
/// Notes:
/// - `sequence_number` is monotonically increasing per machine, starting at 1.
/// - `day` is the simulated day the event happened on (number of day advances
///   the machine had seen), not wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    machine_id: MachineId,
    machine_label: String,

    /// Monotonically increasing position in the machine's stream.
    sequence_number: u64,
    day: u32,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(
        machine_id: MachineId,
        machine_label: impl Into<String>,
        sequence_number: u64,
        day: u32,
        payload: E,
    ) -> Self {
        Self {
            machine_id,
            machine_label: machine_label.into(),
            sequence_number,
            day,
            payload,
        }
    }

    pub fn machine_id(&self) -> MachineId {
        self.machine_id
    }

    pub fn machine_label(&self) -> &str {
        &self.machine_label
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
