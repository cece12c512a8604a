//! The platform "map a shared library into this process" primitive.

use std::path::Path;

use crate::error::LinkError;

/// Loads shared libraries into the current process.
///
/// Implementations must keep loaded libraries mapped for the rest of the
/// process lifetime so their exported symbols stay resolvable.
pub trait NativeLoader: Send + Sync {
    /// Load a library by file name through the platform search path
    /// (`LD_LIBRARY_PATH`, `PATH`, ...).
    fn load_by_name(&self, name: &str) -> Result<(), LinkError>;

    /// Load a library from an absolute path.
    fn load_path(&self, path: &Path) -> Result<(), LinkError>;
}
