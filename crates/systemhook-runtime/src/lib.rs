//! Extraction and OS-level loading of the `systemhook` native library.
//!
//! This crate implements the ports defined in `systemhook-core`:
//! - [`DynamicLoader`]: the platform dynamic linker via `libloading`
//! - [`EmbeddedResources`], [`DirectoryResources`], [`ArchiveResources`]:
//!   where bundled libraries come from
//!
//! and composes them in [`LibraryResolver`], which tries operator overrides
//! first and falls back to extracting the bundled library for this platform.
#![deny(unsafe_code)]

mod global;
pub mod loader;
pub mod resolver;
pub mod resources;

pub use global::{global_resolver, install_global_resolver, load_library};
pub use loader::DynamicLoader;
pub use resolver::{ExtractedArtifact, LibraryResolver, LoadSource};
pub use resources::{
    ArchiveResources, DirectoryResources, ENV_RESOURCE_DIR, EmbeddedResources,
    default_resource_root, provider_for,
};
