use serde::{Deserialize, Serialize};

use vendsim_events::Event;

use crate::beverage::BeverageKind;

/// Notices a vending machine records while it is operated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MachineEvent {
    /// A beverage was stocked at `index`.
    BeverageAdded {
        index: usize,
        kind: BeverageKind,
        description: String,
    },
    /// The machine was full; the beverage was handed back.
    AddRejected {
        kind: BeverageKind,
        description: String,
        capacity: usize,
    },
    BeverageRemoved {
        index: usize,
        kind: BeverageKind,
        description: String,
    },
    /// No beverage at `index`; nothing was removed.
    RemoveRejected { index: usize, len: usize },
    /// Aging hit a beverage whose remaining life was already exhausted.
    AlreadyExpired { index: usize, kind: BeverageKind },
    DayAdvanced { day: u32, items: usize },
    /// An eviction pass finished; `count` may be zero.
    ExpiredEvicted { count: usize },
}

impl Event for MachineEvent {
    fn event_type(&self) -> &'static str {
        match self {
            MachineEvent::BeverageAdded { .. } => "vending.beverage.added",
            MachineEvent::AddRejected { .. } => "vending.beverage.add_rejected",
            MachineEvent::BeverageRemoved { .. } => "vending.beverage.removed",
            MachineEvent::RemoveRejected { .. } => "vending.beverage.remove_rejected",
            MachineEvent::AlreadyExpired { .. } => "vending.beverage.already_expired",
            MachineEvent::DayAdvanced { .. } => "vending.day.advanced",
            MachineEvent::ExpiredEvicted { .. } => "vending.expired.evicted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn is_warning(&self) -> bool {
        matches!(
            self,
            MachineEvent::AddRejected { .. }
                | MachineEvent::RemoveRejected { .. }
                | MachineEvent::AlreadyExpired { .. }
        )
    }
}

impl core::fmt::Display for MachineEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MachineEvent::BeverageAdded { description, .. } => write!(f, "added {description}"),
            MachineEvent::AddRejected { description, capacity, .. } => {
                write!(f, "cannot add {description}: full ({capacity} slots)")
            }
            MachineEvent::BeverageRemoved { index, description, .. } => {
                write!(f, "removed [{index}] {description}")
            }
            MachineEvent::RemoveRejected { index, len } => {
                write!(f, "invalid index {index} (len {len}); nothing removed")
            }
            MachineEvent::AlreadyExpired { index, kind } => {
                write!(f, "warning: [{index}] {kind} has already expired")
            }
            MachineEvent::DayAdvanced { day, items } => {
                write!(f, "day {day}: {items} beverage(s) aged by one day")
            }
            MachineEvent::ExpiredEvicted { count: 0 } => f.write_str("no expired beverages found"),
            MachineEvent::ExpiredEvicted { count } => {
                write!(f, "removed {count} expired beverage(s)")
            }
        }
    }
}
