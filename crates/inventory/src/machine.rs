use std::collections::BTreeMap;

use serde::Serialize;

use vendsim_core::{DomainError, DomainResult, Entity, MachineId};
use vendsim_events::EventEnvelope;

use crate::beverage::{AgeOutcome, Beverage, BeverageKind};
use crate::event::MachineEvent;

pub const DEFAULT_LABEL: &str = "Vending Machine";

const RULE_WIDTH: usize = 50;

/// A capacity-bounded, insertion-ordered store of beverages.
///
/// Invariant: `items.len() <= capacity` at all times.
///
/// Routine operations never fail hard: a full machine rejects an add with
/// `false`, and only [`VendingMachine::remove_at`] returns an error. Every
/// outcome is traced and, unless disabled, recorded in an outbox drained with
/// [`VendingMachine::take_events`].
#[derive(Debug, Clone)]
pub struct VendingMachine {
    id: MachineId,
    label: String,
    capacity: usize,
    items: Vec<Beverage>,
    day: u32,
    sequence: u64,
    outbox: Option<Vec<EventEnvelope<MachineEvent>>>,
}

impl VendingMachine {
    pub fn new(capacity: usize, label: impl Into<String>) -> Self {
        Self {
            id: MachineId::new(),
            label: label.into(),
            capacity,
            items: Vec::with_capacity(capacity),
            day: 0,
            sequence: 0,
            outbox: Some(Vec::new()),
        }
    }

    /// A machine with the default label.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, DEFAULT_LABEL)
    }

    /// Stop recording notices (tracing output is unaffected).
    pub fn without_event_log(mut self) -> Self {
        self.outbox = None;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of beverages.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.items.len())
    }

    /// Number of days advanced so far.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn items(&self) -> &[Beverage] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Beverage> {
        self.items.get(index)
    }

    /// Stock a beverage at the end of the machine.
    ///
    /// Returns `false` (and drops the beverage) when the machine is full.
    pub fn add(&mut self, beverage: Beverage) -> bool {
        let kind = beverage.kind();
        let description = beverage.describe();

        if self.is_full() {
            tracing::warn!(
                machine = %self.label,
                %kind,
                capacity = self.capacity,
                "cannot add {description}: machine is full"
            );
            self.record(MachineEvent::AddRejected {
                kind,
                description,
                capacity: self.capacity,
            });
            return false;
        }

        let index = self.items.len();
        self.items.push(beverage);
        tracing::info!(machine = %self.label, %kind, index, "added {description}");
        self.record(MachineEvent::BeverageAdded {
            index,
            kind,
            description,
        });
        true
    }

    /// Remove and return the beverage at `index`, keeping the order of the rest.
    pub fn remove_at(&mut self, index: usize) -> DomainResult<Beverage> {
        let len = self.items.len();
        if index >= len {
            tracing::warn!(machine = %self.label, index, len, "invalid index; no beverage removed");
            self.record(MachineEvent::RemoveRejected { index, len });
            return Err(DomainError::index_out_of_range(index, len));
        }

        let removed = self.items.remove(index);
        let kind = removed.kind();
        let description = removed.describe();
        tracing::info!(machine = %self.label, %kind, index, "removed {description}");
        self.record(MachineEvent::BeverageRemoved {
            index,
            kind,
            description,
        });
        Ok(removed)
    }

    /// Remove every expired beverage and return them in container order.
    ///
    /// Survivors keep their relative order.
    pub fn evict_expired(&mut self) -> Vec<Beverage> {
        let (expired, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(Beverage::is_expired);
        self.items = kept;

        let count = expired.len();
        if count == 0 {
            tracing::info!(machine = %self.label, "no expired beverages found");
        } else {
            tracing::info!(machine = %self.label, count, "removed {count} expired beverage(s)");
        }
        self.record(MachineEvent::ExpiredEvicted { count });
        expired
    }

    /// Age every beverage by one day, in index order.
    ///
    /// Expired beverages stay in the machine until [`Self::evict_expired`].
    pub fn advance_day(&mut self) {
        self.day += 1;
        let span = tracing::info_span!("advance_day", machine = %self.label, day = self.day);
        let _guard = span.enter();

        let already_expired: Vec<(usize, BeverageKind)> = self
            .items
            .iter_mut()
            .enumerate()
            .filter_map(|(index, item)| match item.age() {
                AgeOutcome::AlreadyExpired => Some((index, item.kind())),
                AgeOutcome::Aged { .. } => None,
            })
            .collect();

        for (index, kind) in already_expired {
            self.record(MachineEvent::AlreadyExpired { index, kind });
        }

        let items = self.items.len();
        tracing::info!(items, "all beverages aged by one day");
        self.record(MachineEvent::DayAdvanced { day: self.day, items });
    }

    /// Count of beverages per variant.
    pub fn inventory_summary(&self) -> BTreeMap<BeverageKind, usize> {
        let mut summary = BTreeMap::new();
        for item in &self.items {
            *summary.entry(item.kind()).or_insert(0) += 1;
        }
        summary
    }

    /// All beverages of `kind`, in container order.
    pub fn find_by_kind(&self, kind: BeverageKind) -> Vec<&Beverage> {
        self.items.iter().filter(|item| item.kind() == kind).collect()
    }

    /// Sum of volumes in milliliters.
    pub fn total_volume(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.volume())).sum()
    }

    /// Drain recorded notices, oldest first.
    pub fn take_events(&mut self) -> Vec<EventEnvelope<MachineEvent>> {
        self.outbox.as_mut().map(std::mem::take).unwrap_or_default()
    }

    pub fn snapshot(&self) -> MachineSnapshot<'_> {
        MachineSnapshot {
            id: self.id,
            label: &self.label,
            capacity: self.capacity,
            day: self.day,
            total_volume: self.total_volume(),
            items: &self.items,
        }
    }

    fn record(&mut self, event: MachineEvent) {
        self.sequence += 1;
        if let Some(outbox) = self.outbox.as_mut() {
            outbox.push(EventEnvelope::new(
                self.id,
                self.label.clone(),
                self.sequence,
                self.day,
                event,
            ));
        }
    }
}

impl Entity for VendingMachine {
    type Id = MachineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for VendingMachine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{} (capacity: {}, current: {})", self.label, self.capacity, self.items.len())?;
        writeln!(f, "{rule}")?;
        if self.items.is_empty() {
            writeln!(f, "  [Empty]")?;
        }
        for (i, item) in self.items.iter().enumerate() {
            writeln!(f, "  [{i}] {item}")?;
        }
        write!(f, "{rule}")
    }
}

/// Serializable point-in-time view of a machine.
#[derive(Debug, Serialize)]
pub struct MachineSnapshot<'a> {
    pub id: MachineId,
    pub label: &'a str,
    pub capacity: usize,
    pub day: u32,
    pub total_volume: u64,
    pub items: &'a [Beverage],
}
