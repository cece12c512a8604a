//! Error types for library resolution and loading.
//!
//! `LinkError` is what a [`NativeLoader`](crate::ports::NativeLoader) reports
//! when the platform refuses a library. Whether that is fatal depends on the
//! tier: the override tier swallows it and falls through, the bundled tier
//! surfaces it as [`LoadError::Link`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The platform load primitive rejected a library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot load {target}: {reason}")]
pub struct LinkError {
    /// File name or path that was handed to the load primitive.
    pub target: String,
    /// Diagnostic reported by the platform.
    pub reason: String,
}

impl LinkError {
    pub fn new(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            reason: reason.into(),
        }
    }
}

/// Fatal failure to make the native library available.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No bundled library exists for this platform.
    #[error("lib: {file_name} not found in lib directory (resource {resource_path})")]
    ResourceNotFound {
        file_name: String,
        resource_path: String,
    },

    /// The bundled library exists but could not be read.
    #[error("Failed to read bundled resource {resource_path}: {source}")]
    ResourceRead {
        resource_path: String,
        #[source]
        source: io::Error,
    },

    /// Writing or promoting the extracted library failed.
    #[error("Failed to extract native library to {path}: {source}")]
    Extraction {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The extracted library could not be loaded.
    #[error(transparent)]
    Link(#[from] LinkError),
}

impl LoadError {
    pub fn extraction(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Extraction {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for load operations.
pub type LoadResult<T> = Result<T, LoadError>;
