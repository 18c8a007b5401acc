//! Kernel module - infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use viacep::ViaCepClient;

use crate::config::Config;
use crate::domains::board::BoardRuntime;
use crate::domains::needs::NeedRegistry;

pub use deps::{BoardDeps, ViaCepAdapter};
pub use test_dependencies::MockAddressLookup;
pub use traits::*;

/// Wire production dependencies from configuration.
pub fn build_deps(config: &Config) -> Result<BoardDeps> {
    let client = ViaCepClient::with_options(&config.viacep_base_url, config.postal_lookup_timeout)
        .context("Failed to build ViaCEP client")?;

    info!(
        base_url = %client.base_url(),
        timeout = ?client.timeout(),
        "Postal lookup configured"
    );

    Ok(BoardDeps::new(Arc::new(ViaCepAdapter::new(Arc::new(client)))))
}

/// Build a board runtime from configuration: ViaCEP-backed lookups and an
/// empty or demo-seeded registry.
pub fn build_runtime(config: &Config) -> Result<BoardRuntime> {
    let registry = if config.seed_demo_needs {
        NeedRegistry::seeded()
    } else {
        NeedRegistry::new()
    };

    Ok(BoardRuntime::new(registry, build_deps(config)?))
}
