//! Demo driver for the vending simulation.
//!
//! Everything here sits outside the domain: it builds machines, drives the
//! daily loop and renders what happened.

pub mod config;
pub mod narrator;
pub mod scenarios;

use std::io::Write;

pub use config::{ConfigError, DemoConfig, OutputMode, Scenario};
pub use narrator::Narrator;

/// Run the configured scenario(s) in order.
pub fn run<W: Write>(config: &DemoConfig, narrator: &mut Narrator<W>) -> anyhow::Result<()> {
    tracing::debug!(scenario = ?config.scenario, "running scenario");
    scenarios::run(config.scenario, narrator)?;
    narrator.rule('=')?;
    narrator.line("All scenarios completed successfully!")?;
    Ok(())
}
