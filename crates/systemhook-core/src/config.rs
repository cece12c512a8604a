//! Operator configuration for library resolution.
//!
//! Every value resolves in the same order:
//! 1. Explicit value set through the `with_*` builders
//! 2. Environment variable (`SYSTEMHOOK_*`), ignored when blank
//! 3. Built-in default

use std::env;
use std::path::{Path, PathBuf};

use crate::naming::LibraryNaming;
use crate::resource::BASE_NAME;

/// Explicit library file name to load instead of the default.
pub const ENV_LIB_NAME: &str = "SYSTEMHOOK_LIB_NAME";

/// Directory containing the library named by `SYSTEMHOOK_LIB_NAME` (or the default name).
pub const ENV_LIB_PATH: &str = "SYSTEMHOOK_LIB_PATH";

/// Directory bundled libraries are extracted into. Defaults to the system temp dir.
pub const ENV_EXTRACT_DIR: &str = "SYSTEMHOOK_EXTRACT_DIR";

/// Where the override tier should look for the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideTarget {
    /// Load by file name through the platform library search path.
    SearchPath(String),
    /// Load from an absolute path inside the operator-supplied directory.
    Path(PathBuf),
}

/// Operator-supplied settings for a load attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    pub lib_name: Option<String>,
    pub lib_path: Option<PathBuf>,
    pub extract_dir: Option<PathBuf>,
}

impl LoaderConfig {
    /// Read the configuration from `SYSTEMHOOK_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            lib_name: non_blank_var(ENV_LIB_NAME),
            lib_path: non_blank_var(ENV_LIB_PATH).map(PathBuf::from),
            extract_dir: non_blank_var(ENV_EXTRACT_DIR).map(PathBuf::from),
        }
    }

    #[must_use]
    pub fn with_lib_name(mut self, name: impl Into<String>) -> Self {
        self.lib_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_lib_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.lib_path = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_extract_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.extract_dir = Some(dir.into());
        self
    }

    /// File name tried by the override tier: the explicit name, or the
    /// decorated base name (`libsystemhook.so`, `systemhook.dll`, ...).
    pub fn effective_lib_name(&self, naming: LibraryNaming) -> String {
        self.lib_name
            .clone()
            .unwrap_or_else(|| naming.decorate(BASE_NAME))
    }

    /// What the override tier should attempt to load.
    pub fn override_target(&self, naming: LibraryNaming) -> OverrideTarget {
        let name = self.effective_lib_name(naming);
        match &self.lib_path {
            None => OverrideTarget::SearchPath(name),
            Some(dir) => OverrideTarget::Path(absolute(&dir.join(name))),
        }
    }

    /// Directory bundled libraries are extracted into.
    pub fn extract_dir(&self) -> PathBuf {
        self.extract_dir.clone().unwrap_or_else(env::temp_dir)
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
