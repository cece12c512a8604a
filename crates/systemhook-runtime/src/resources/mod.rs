//! `ResourceProvider` implementations.
//!
//! - [`EmbeddedResources`]: an in-memory table, typically filled with
//!   `include_bytes!` at build time
//! - [`DirectoryResources`]: a directory tree whose relative paths are the
//!   resource paths
//! - [`ArchiveResources`]: a zip archive whose entry names are the resource paths

mod archive;
mod directory;
mod embedded;

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use systemhook_core::ResourceProvider;

pub use archive::ArchiveResources;
pub use directory::DirectoryResources;
pub use embedded::EmbeddedResources;

/// Environment variable overriding the directory bundled libraries are read from.
pub const ENV_RESOURCE_DIR: &str = "SYSTEMHOOK_RESOURCE_DIR";

/// Get the root directory for bundled resources.
///
/// Resolution order:
/// 1. `SYSTEMHOOK_RESOURCE_DIR` environment variable
/// 2. Directory containing the current executable
/// 3. Current working directory
pub fn default_resource_root() -> PathBuf {
    if let Ok(path) = env::var(ENV_RESOURCE_DIR)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }

    if let Ok(exe) = env::current_exe()
        && let Some(dir) = exe.parent()
    {
        return dir.to_path_buf();
    }

    PathBuf::from(".")
}

/// Pick a provider for `path`: zip-style archives (`.zip`, `.jar`) are read
/// as archives, anything else as a directory tree.
pub fn provider_for(path: &Path) -> Arc<dyn ResourceProvider> {
    let is_archive = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip") || ext.eq_ignore_ascii_case("jar"));

    if is_archive {
        Arc::new(ArchiveResources::new(path))
    } else {
        Arc::new(DirectoryResources::new(path))
    }
}

/// Split a resource path into its components, rejecting anything that could
/// escape the provider root.
fn resource_components(path: &str) -> Option<Vec<&str>> {
    let components: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
    let escapes = components
        .iter()
        .any(|part| *part == "." || *part == ".." || part.contains('\\'));
    (!components.is_empty() && !escapes).then_some(components)
}
