//! Core domain types and port definitions for loading the `systemhook`
//! native library.
//!
//! This crate is pure: it derives platform identifiers, library file names and
//! resource paths, and defines the ports (`ResourceProvider`, `NativeLoader`)
//! that the runtime crate implements. Nothing in here touches the filesystem
//! or maps libraries into the process.
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod error;
pub mod mode;
pub mod naming;
pub mod platform;
pub mod ports;
pub mod resource;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{ENV_EXTRACT_DIR, ENV_LIB_NAME, ENV_LIB_PATH, LoaderConfig, OverrideTarget};
pub use error::{LinkError, LoadError, LoadResult};
pub use mode::{GlobalHookMode, ParseModeError};
pub use naming::{LEGACY_EXTENSIONS, LibraryNaming, file_extension, normalize_legacy_extension};
pub use platform::{
    ENV_OS_ARCH, ENV_OS_NAME, HostEnvironment, PlatformId, normalize_arch, normalize_os_name,
};
pub use ports::{NativeLoader, ResourceProvider, ResourceStream};
pub use resource::{BASE_NAME, RESOURCE_NAMESPACE, ResourceDescriptor};
