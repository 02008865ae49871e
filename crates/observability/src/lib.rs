//! Tracing/logging (shared setup).

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use crate::tracing::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// `default_filter` applies when `RUST_LOG` is unset. This is safe to call
/// multiple times; subsequent calls become no-ops.
pub fn init_with_default_filter(default_filter: &str) -> Result<(), ConfigError> {
    let mut config = ObservabilityConfig::from_env()?;
    config.default_filter = Some(default_filter.to_string());
    crate::tracing::init(&config);
    Ok(())
}
