//! Environment-driven demo configuration.
//!
//! - `VENDSIM_SCENARIO`: `all` (default), `basic`, `machine`, `network`, `polymorphism`
//! - `VENDSIM_OUTPUT`: `text` (default) or `json`
//!
//! A first positional argument overrides `VENDSIM_SCENARIO`.

use core::str::FromStr;

use thiserror::Error;

pub const SCENARIO_VAR: &str = "VENDSIM_SCENARIO";
pub const OUTPUT_VAR: &str = "VENDSIM_OUTPUT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown scenario '{0}' (expected all, basic, machine, network or polymorphism)")]
    UnknownScenario(String),

    #[error("unknown output mode '{0}' (expected text or json)")]
    UnknownOutput(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Scenario {
    #[default]
    All,
    Basic,
    Machine,
    Network,
    Polymorphism,
}

impl Scenario {
    const SEQUENCE: [Scenario; 4] = [
        Scenario::Basic,
        Scenario::Machine,
        Scenario::Network,
        Scenario::Polymorphism,
    ];

    /// The concrete scenarios to run, in narration order.
    pub fn expand(&self) -> &[Scenario] {
        match self {
            Scenario::All => &Self::SEQUENCE,
            Scenario::Basic => &Self::SEQUENCE[0..1],
            Scenario::Machine => &Self::SEQUENCE[1..2],
            Scenario::Network => &Self::SEQUENCE[2..3],
            Scenario::Polymorphism => &Self::SEQUENCE[3..4],
        }
    }
}

impl FromStr for Scenario {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Scenario::All),
            "basic" => Ok(Scenario::Basic),
            "machine" => Ok(Scenario::Machine),
            "network" => Ok(Scenario::Network),
            "polymorphism" => Ok(Scenario::Polymorphism),
            _ => Err(ConfigError::UnknownScenario(s.to_string())),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            _ => Err(ConfigError::UnknownOutput(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemoConfig {
    pub scenario: Scenario,
    pub output: OutputMode,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(|key| std::env::var(key).ok(), std::env::args().nth(1))
    }

    pub fn from_sources(
        lookup: impl Fn(&str) -> Option<String>,
        scenario_arg: Option<String>,
    ) -> Result<Self, ConfigError> {
        let scenario = match scenario_arg.or_else(|| lookup(SCENARIO_VAR)) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => Scenario::default(),
        };
        let output = match lookup(OUTPUT_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => OutputMode::default(),
        };
        Ok(Self { scenario, output })
    }
}
