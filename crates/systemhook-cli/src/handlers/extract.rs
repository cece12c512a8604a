//! Extract command handler.

use std::path::Path;

use anyhow::{Context, Result};
use systemhook_core::LoaderConfig;
use systemhook_runtime::{ExtractedArtifact, LibraryResolver};

use super::resolver_for;

/// Extract the bundled library for this host and print where it landed.
pub fn execute(resources: Option<&Path>, config: &LoaderConfig) -> Result<()> {
    let artifact = run(&resolver_for(resources), config)?;
    let status = if artifact.reused { "reused" } else { "extracted" };
    println!("{} ({status}, crc32 {})", artifact.path.display(), artifact.checksum);
    Ok(())
}

fn run(resolver: &LibraryResolver, config: &LoaderConfig) -> Result<ExtractedArtifact> {
    resolver.extract(config).with_context(|| {
        format!(
            "Failed to extract native library for {}",
            resolver.platform_id()
        )
    })
}
