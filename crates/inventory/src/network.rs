//! A group of machines operated together (daily rounds, maintenance checks,
//! network-wide statistics).

use vendsim_events::EventEnvelope;

use crate::event::MachineEvent;
use crate::machine::VendingMachine;

#[derive(Debug, Clone, Default)]
pub struct VendingNetwork {
    machines: Vec<VendingMachine>,
}

impl VendingNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_machine(&mut self, machine: VendingMachine) -> &mut VendingMachine {
        let index = self.machines.len();
        self.machines.push(machine);
        &mut self.machines[index]
    }

    pub fn machines(&self) -> &[VendingMachine] {
        &self.machines
    }

    /// First machine with the given label.
    pub fn get(&self, label: &str) -> Option<&VendingMachine> {
        self.machines.iter().find(|m| m.label() == label)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut VendingMachine> {
        self.machines.iter_mut().find(|m| m.label() == label)
    }

    pub fn total_items(&self) -> usize {
        self.machines.iter().map(VendingMachine::count).sum()
    }

    pub fn total_capacity(&self) -> usize {
        self.machines.iter().map(VendingMachine::capacity).sum()
    }

    /// Share of capacity in use, as a percentage. 0.0 for a network without capacity.
    pub fn utilization_percent(&self) -> f64 {
        let capacity = self.total_capacity();
        if capacity == 0 {
            return 0.0;
        }
        self.total_items() as f64 / capacity as f64 * 100.0
    }

    pub fn total_volume(&self) -> u64 {
        self.machines.iter().map(VendingMachine::total_volume).sum()
    }

    pub fn advance_day(&mut self) {
        for machine in &mut self.machines {
            machine.advance_day();
        }
    }

    /// Evict expired beverages everywhere; returns how many were removed.
    pub fn evict_expired(&mut self) -> usize {
        let total: usize = self.machines.iter_mut().map(|m| m.evict_expired().len()).sum();
        tracing::info!(machines = self.machines.len(), total, "maintenance check complete");
        total
    }

    /// Drain every machine's outbox, machine by machine.
    pub fn take_events(&mut self) -> Vec<EventEnvelope<MachineEvent>> {
        self.machines.iter_mut().flat_map(VendingMachine::take_events).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beverage::{Beverage, ColaContainer};

    fn network() -> VendingNetwork {
        let mut network = VendingNetwork::new();

        let library = network.add_machine(VendingMachine::new(5, "Library Machine"));
        library.add(Beverage::water(500));
        library.add(Beverage::water_with(500, true));
        library.add(Beverage::juice_with(330, "Apple"));
        library.add(Beverage::juice_with(330, "Orange"));

        let cafeteria = network.add_machine(VendingMachine::new(8, "Cafeteria Machine"));
        cafeteria.add(Beverage::cola_in(ColaContainer::Can));
        cafeteria.add(Beverage::cola_in(ColaContainer::Bottle));
        cafeteria.add(Beverage::juice_with(500, "Tropical"));
        cafeteria.add(Beverage::energy_drink_with(500, 45, 160, false));
        cafeteria.add(Beverage::water(1000));
        cafeteria.add(Beverage::generic(350, 2));

        let gym = network.add_machine(VendingMachine::new(4, "Gym Machine"));
        gym.add(Beverage::energy_drink_with(250, 60, 200, true));
        gym.add(Beverage::energy_drink_with(500, 60, 300, false));
        gym.add(Beverage::water(750));
        gym.add(Beverage::water_with(750, true));

        network
    }

    #[test]
    fn statistics_span_all_machines() {
        let network = network();
        assert_eq!(network.total_items(), 14);
        assert_eq!(network.total_capacity(), 17);
        assert!((network.utilization_percent() - 14.0 / 17.0 * 100.0).abs() < 1e-9);
        assert_eq!(network.total_volume(), 1660 + 3180 + 2250);
    }

    #[test]
    fn a_week_expires_juices_and_short_lived_drinks() {
        let mut network = network();
        for _ in 0..7 {
            network.advance_day();
        }
        assert_eq!(network.evict_expired(), 4);
        assert_eq!(network.get("Library Machine").map(VendingMachine::count), Some(2));
        assert_eq!(network.get("Cafeteria Machine").map(VendingMachine::count), Some(4));
        assert_eq!(network.get("Gym Machine").map(VendingMachine::count), Some(4));
    }

    #[test]
    fn empty_network_has_zero_utilization() {
        assert_eq!(VendingNetwork::new().utilization_percent(), 0.0);
    }

    #[test]
    fn take_events_drains_every_outbox() {
        let mut network = network();
        assert_eq!(network.take_events().len(), 14);
        assert!(network.take_events().is_empty());

        if let Some(gym) = network.get_mut("Gym Machine") {
            gym.advance_day();
        }
        let events = network.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].machine_label(), "Gym Machine");
    }
}
