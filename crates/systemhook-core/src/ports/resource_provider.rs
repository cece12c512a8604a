//! Access to bundled library artifacts.

use std::io::{self, Read};

/// A readable stream over one bundled artifact.
pub type ResourceStream<'a> = Box<dyn Read + Send + 'a>;

/// Read-only namespace of bundled artifacts, addressed by virtual paths such
/// as `systemhook/lib/libsystemhook-linux-amd64.so`.
pub trait ResourceProvider: Send + Sync {
    /// Open the artifact at `path`.
    ///
    /// Returns `Ok(None)` when no artifact exists at that path; `Err` is
    /// reserved for artifacts that exist but cannot be opened.
    fn open(&self, path: &str) -> io::Result<Option<ResourceStream<'_>>>;
}
