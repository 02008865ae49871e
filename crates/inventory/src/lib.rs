//! Inventory domain module.
//!
//! Perishable beverages and the capacity-bounded machines that store, age and
//! prune them. Pure in-memory logic: aging is an explicit caller-driven step,
//! and every notice is both traced and recorded as a typed event.

pub mod beverage;
pub mod event;
pub mod machine;
pub mod network;

pub use beverage::{AgeOutcome, Beverage, BeverageKind, ColaContainer, ContainerSpec, Variant};
pub use event::MachineEvent;
pub use machine::{DEFAULT_LABEL, MachineSnapshot, VendingMachine};
pub use network::VendingNetwork;
