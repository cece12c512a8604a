//! Command handlers.
//!
//! Each handler is a thin wrapper: build what the runtime needs from the
//! parsed arguments, call it, and format the outcome for the terminal.

pub mod extract;
pub mod load;
pub mod paths;
pub mod platform;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use systemhook_runtime::{DynamicLoader, LibraryResolver, default_resource_root, provider_for};

/// Directory or archive bundled libraries are read from.
pub(crate) fn resource_root(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(default_resource_root, Path::to_path_buf)
}

/// Resolver for the detected host, reading from `resources` and loading with
/// the platform dynamic linker.
pub(crate) fn resolver_for(resources: Option<&Path>) -> LibraryResolver {
    LibraryResolver::new(
        provider_for(&resource_root(resources)),
        Arc::new(DynamicLoader::new()),
    )
}
