//! Resources read from a directory tree.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use systemhook_core::{ResourceProvider, ResourceStream};

use super::resource_components;

/// Resolves `systemhook/lib/<file>` to `<root>/systemhook/lib/<file>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn locate(&self, path: &str) -> Option<PathBuf> {
        let components = resource_components(path)?;
        Some(components.iter().fold(self.root.clone(), |acc, part| acc.join(part)))
    }
}

impl ResourceProvider for DirectoryResources {
    fn open(&self, path: &str) -> io::Result<Option<ResourceStream<'_>>> {
        let Some(location) = self.locate(path) else {
            return Ok(None);
        };
        if !location.is_file() {
            return Ok(None);
        }

        match File::open(&location) {
            Ok(file) => Ok(Some(Box::new(BufReader::new(file)))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
