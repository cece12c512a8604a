//! Load command handler.
//!
//! Goes through the process-wide resolver, exactly like an embedding
//! application would.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use systemhook_core::LoaderConfig;
use systemhook_runtime::{global_resolver, install_global_resolver};
use tracing::debug;

use super::resolver_for;

/// Run the load sequence and print where the library came from.
pub fn execute(resources: Option<&Path>, config: &LoaderConfig) -> Result<()> {
    install_global_resolver(resolver_for(resources))
        .map_err(|_| anyhow!("The process-wide resolver was already initialized"))?;

    let resolver = global_resolver();
    debug!(platform = %resolver.platform_id(), "Loading native library");
    let source = resolver
        .load(config)
        .with_context(|| format!("Failed to load native library for {}", resolver.platform_id()))?;

    println!("loaded from {source}");
    Ok(())
}
