//! The narrated demo scenarios.

use std::io::Write;

use vendsim_events::Event;
use vendsim_inventory::{
    Beverage, BeverageKind, ColaContainer, Variant, VendingMachine, VendingNetwork,
};

use crate::config::Scenario;
use crate::narrator::Narrator;

pub fn run<W: Write>(scenario: Scenario, narrator: &mut Narrator<W>) -> anyhow::Result<()> {
    match scenario {
        Scenario::All => {
            for scenario in Scenario::All.expand() {
                run(*scenario, narrator)?;
            }
            Ok(())
        }
        Scenario::Basic => basic_aging(narrator),
        Scenario::Machine => single_machine(narrator),
        Scenario::Network => machine_network(narrator),
        Scenario::Polymorphism => polymorphism(narrator),
    }
}

/// Build a few drinks and age them by hand.
fn basic_aging<W: Write>(narrator: &mut Narrator<W>) -> anyhow::Result<()> {
    narrator.heading("SCENARIO 1: Creating and aging beverages")?;

    narrator.section("Creating Beverages")?;
    let mut drinks = vec![
        Beverage::generic(500, 10),
        Beverage::juice_with(1000, "Orange"),
        Beverage::juice_with(750, "Apple"),
        Beverage::cola("can")?,
        Beverage::cola("bottle")?,
    ];
    for drink in &drinks {
        narrator.line(format_args!("  {drink}"))?;
    }

    narrator.section("Simulating 3 Days Passing")?;
    for day in 1..=3 {
        narrator.line(format_args!("\nDay {day}:"))?;
        for drink in &mut drinks {
            drink.age();
            narrator.line(format_args!("  {drink}"))?;
        }
    }

    narrator.section("Expiration Status")?;
    for drink in &drinks {
        let status = if drink.is_expired() { "EXPIRED" } else { "Fresh" };
        narrator.line(format_args!("  {}: {status}", drink.kind()))?;
    }

    narrator.section("Rejected Container")?;
    match Beverage::cola("large") {
        Ok(cola) => narrator.line(format_args!("  unexpectedly built {cola}"))?,
        Err(err) => narrator.line(format_args!("  Cola('large') -> {err}"))?,
    }
    Ok(())
}

/// Stock one machine, let it age, and clean it up.
fn single_machine<W: Write>(narrator: &mut Narrator<W>) -> anyhow::Result<()> {
    narrator.heading("SCENARIO 2: Vending machine operations")?;

    let mut vm = VendingMachine::new(6, "Campus Vending Machine");

    narrator.section("Stocking the Vending Machine")?;
    vm.add(Beverage::generic(350, 5));
    vm.add(Beverage::juice_with(500, "Grape"));
    vm.add(Beverage::cola_in(ColaContainer::Can));
    vm.add(Beverage::cola_in(ColaContainer::Bottle));
    vm.add(Beverage::energy_drink_with(250, 30, 150, true));
    vm.add(Beverage::water_with(500, true));
    vm.add(Beverage::water(330));
    narrator.relay(&mut vm)?;
    narrator.show_machine(&vm)?;

    narrator.section("Inventory Summary")?;
    for (kind, count) in vm.inventory_summary() {
        narrator.line(format_args!("  {kind}: {count}"))?;
    }
    narrator.line(format_args!("  Total Volume: {}mL", vm.total_volume()))?;

    narrator.section("Simulating 5 Days")?;
    for _ in 0..5 {
        vm.advance_day();
    }
    narrator.relay(&mut vm)?;
    narrator.show_machine(&vm)?;

    narrator.section("Checking for Expired Beverages")?;
    vm.evict_expired();
    narrator.relay(&mut vm)?;
    narrator.show_machine(&vm)?;

    narrator.section("Selling One Beverage")?;
    if let Ok(sold) = vm.remove_at(0) {
        narrator.line(format_args!("  Sold: {sold}"))?;
    }
    // Past the end on purpose: a soft failure, reported as a notice.
    let _ = vm.remove_at(vm.count() + 3);
    narrator.relay(&mut vm)?;

    narrator.section("Finding Cola Products")?;
    for cola in vm.find_by_kind(BeverageKind::Cola) {
        narrator.line(format_args!("  Found: {cola}"))?;
    }
    Ok(())
}

/// Operate three differently stocked machines as one network.
fn machine_network<W: Write>(narrator: &mut Narrator<W>) -> anyhow::Result<()> {
    narrator.heading("SCENARIO 3: Vending machine network management")?;

    let mut network = VendingNetwork::new();

    narrator.section("Stocking Machines")?;
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

    narrator.relay_all(network.take_events())?;
    for machine in network.machines() {
        narrator.show_machine(machine)?;
    }

    narrator.section("Network Statistics")?;
    let volume = network.total_volume();
    narrator.line(format_args!("  Total Machines: {}", network.machines().len()))?;
    narrator.line(format_args!("  Total Beverages: {}", network.total_items()))?;
    narrator.line(format_args!("  Total Capacity: {}", network.total_capacity()))?;
    narrator.line(format_args!("  Utilization: {:.1}%", network.utilization_percent()))?;
    narrator.line(format_args!("  Total Volume: {volume}mL ({:.1}L)", volume as f64 / 1000.0))?;

    narrator.section("Simulating One Week")?;
    for _ in 0..7 {
        network.advance_day();
    }
    // Daily notices are routine here; only the warnings are worth showing.
    let warnings = network
        .take_events()
        .into_iter()
        .filter(|notice| notice.payload().is_warning())
        .collect();
    narrator.relay_all(warnings)?;
    narrator.line("One week has passed...")?;

    narrator.section("Weekly Maintenance Check")?;
    let total_expired = network.evict_expired();
    narrator.relay_all(network.take_events())?;
    narrator.line(format_args!("\nTotal expired beverages removed: {total_expired}"))?;

    narrator.section("Final Network State")?;
    for machine in network.machines() {
        narrator.line(format_args!(
            "  {}: {}/{} beverages",
            machine.label(),
            machine.count(),
            machine.capacity()
        ))?;
    }
    Ok(())
}

/// Same calls, different variants; matching on the variant tag.
fn polymorphism<W: Write>(narrator: &mut Narrator<W>) -> anyhow::Result<()> {
    narrator.heading("SCENARIO 4: One interface, many variants")?;

    let drinks = [
        Beverage::generic(500, 3),
        Beverage::juice_with(750, "Mango"),
        Beverage::cola_in(ColaContainer::Can),
        Beverage::energy_drink_with(250, 5, 120, true),
        Beverage::water_with(1000, false),
    ];

    narrator.section("Uniform Description")?;
    for drink in &drinks {
        narrator.line(format_args!("  Type: {:15} | {drink}", drink.kind().name()))?;
    }

    narrator.section("Variant Attributes")?;
    for drink in &drinks {
        let kind = drink.kind();
        match drink.variant() {
            Variant::Cola { container } => {
                narrator.line(format_args!("  {kind}: Container = {container}"))?
            }
            Variant::Juice { fruit_type } => {
                narrator.line(format_args!("  {kind}: Fruit = {fruit_type}"))?
            }
            Variant::EnergyDrink { caffeine_mg, .. } => {
                narrator.line(format_args!("  {kind}: Caffeine = {caffeine_mg}mg"))?
            }
            Variant::Water { sparkling } => {
                narrator.line(format_args!("  {kind}: Sparkling = {sparkling}"))?
            }
            Variant::Generic => narrator.line(format_args!("  {kind}: Basic drink"))?,
        }
    }
    Ok(())
}
