//! Paths command handler.
//!
//! Displays the resolved loader configuration for diagnosing override and
//! extraction problems.

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use systemhook_core::{LibraryNaming, LoaderConfig, OverrideTarget};
use systemhook_runtime::default_resource_root;

/// Every location the load sequence will touch, in `key = value` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderPaths {
    pub lib_name: String,
    pub override_target: OverrideTarget,
    pub extract_dir: PathBuf,
    pub resource_root: PathBuf,
}

impl LoaderPaths {
    pub fn resolve(config: &LoaderConfig, naming: LibraryNaming, resource_root: PathBuf) -> Self {
        Self {
            lib_name: config.effective_lib_name(naming),
            override_target: config.override_target(naming),
            extract_dir: config.extract_dir(),
            resource_root,
        }
    }
}

impl fmt::Display for LoaderPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "lib_name = {}", self.lib_name)?;
        match &self.override_target {
            OverrideTarget::SearchPath(name) => writeln!(f, "override = search path ({name})")?,
            OverrideTarget::Path(path) => writeln!(f, "override = {}", path.display())?,
        }
        writeln!(f, "extract_dir = {}", self.extract_dir.display())?;
        write!(f, "resource_root = {}", self.resource_root.display())
    }
}

/// Execute the paths command.
pub fn execute(config: &LoaderConfig) -> Result<()> {
    let paths = LoaderPaths::resolve(config, LibraryNaming::host(), default_resource_root());
    println!("{paths}");
    Ok(())
}
