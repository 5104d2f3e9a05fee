//! Tracing subscriber setup for hosts embedding the engine.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Fails (without panicking) if a global subscriber is already set.
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|err| anyhow!("invalid log filter {default_filter:?}: {err}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    tracing::debug!(filter = default_filter, "Logging initialized");
    Ok(())
}
