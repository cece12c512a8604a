//! `libloading`-backed implementation of the `NativeLoader` port.

use std::ffi::OsStr;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use libloading::Library;
use systemhook_core::{LinkError, NativeLoader};
use tracing::debug;

/// Loads libraries with the platform dynamic linker and keeps them mapped.
///
/// Every library handle is retained until the loader is dropped. The
/// process-wide resolver lives in a static, so libraries it loads are never
/// unloaded.
#[derive(Debug, Default)]
pub struct DynamicLoader {
    libraries: Mutex<Vec<Library>>,
}

impl DynamicLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of libraries this loader holds open.
    pub fn loaded_count(&self) -> usize {
        self.libraries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn open(&self, target: &OsStr) -> Result<(), LinkError> {
        let library = open_library(target)
            .map_err(|err| LinkError::new(target.to_string_lossy(), err.to_string()))?;
        debug!(target = %target.to_string_lossy(), "Opened native library");
        self.libraries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(library);
        Ok(())
    }
}

impl NativeLoader for DynamicLoader {
    fn load_by_name(&self, name: &str) -> Result<(), LinkError> {
        self.open(OsStr::new(name))
    }

    fn load_path(&self, path: &Path) -> Result<(), LinkError> {
        self.open(path.as_os_str())
    }
}

/// Map a library into the process.
///
/// On Unix the library is opened `RTLD_NOW | RTLD_GLOBAL` so unresolved
/// symbols fail here rather than at first call, and its exports are visible
/// to libraries loaded later.
#[allow(unsafe_code)]
fn open_library(target: &OsStr) -> Result<Library, libloading::Error> {
    #[cfg(unix)]
    {
        use libloading::os::unix::{Library as UnixLibrary, RTLD_GLOBAL, RTLD_NOW};

        // SAFETY: running the library's initializers is the purpose of this
        // call; the library is the systemhook native layer or an operator
        // override of it.
        unsafe { UnixLibrary::open(Some(target), RTLD_NOW | RTLD_GLOBAL) }.map(Library::from)
    }

    #[cfg(not(unix))]
    {
        // SAFETY: see the Unix branch.
        unsafe { Library::new(target) }
    }
}
