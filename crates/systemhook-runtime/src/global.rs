//! The process-wide resolver.
//!
//! Loading the native library is a once-per-process affair, so callers should
//! go through [`load_library`] rather than constructing their own resolver:
//! one resolver means one lock and one load flag for the whole process.

use std::sync::OnceLock;

use systemhook_core::{LoadResult, LoaderConfig};

use crate::resolver::{LibraryResolver, LoadSource};

static GLOBAL_RESOLVER: OnceLock<LibraryResolver> = OnceLock::new();

/// Get the process-wide resolver, creating the default one on first use.
pub fn global_resolver() -> &'static LibraryResolver {
    GLOBAL_RESOLVER.get_or_init(LibraryResolver::with_defaults)
}

/// Replace the default process-wide resolver, e.g. with one serving
/// `include_bytes!`-embedded libraries.
///
/// Must run before the first [`load_library`] / [`global_resolver`] call;
/// afterwards the resolver is handed back unchanged.
pub fn install_global_resolver(resolver: LibraryResolver) -> Result<(), LibraryResolver> {
    GLOBAL_RESOLVER.set(resolver)
}

/// Load the native library into this process, at most once.
///
/// Once the library is loaded this returns the recorded source without
/// reading the environment. Otherwise configuration is read from the
/// `SYSTEMHOOK_*` environment variables for this attempt.
pub fn load_library() -> LoadResult<LoadSource> {
    let resolver = global_resolver();
    if let Some(source) = resolver.loaded_source() {
        return Ok(source);
    }
    resolver.load(&LoaderConfig::from_env())
}
