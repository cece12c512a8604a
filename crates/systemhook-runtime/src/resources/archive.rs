//! Resources read from a zip archive (the layout of a packaged jar or bundle).

use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use systemhook_core::{ResourceProvider, ResourceStream};
use zip::ZipArchive;
use zip::result::ZipError;

/// Upper bound on the buffer reserved up front from an entry's declared size.
const MAX_PREALLOCATION: usize = 16 * 1024 * 1024;

/// Serves archive entries whose names are resource paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveResources {
    archive: PathBuf,
}

impl ArchiveResources {
    pub fn new(archive: impl Into<PathBuf>) -> Self {
        Self {
            archive: archive.into(),
        }
    }

    pub fn archive(&self) -> &Path {
        &self.archive
    }
}

impl ResourceProvider for ArchiveResources {
    fn open(&self, path: &str) -> io::Result<Option<ResourceStream<'_>>> {
        let file = File::open(&self.archive)?;
        let mut archive = ZipArchive::new(file).map_err(io::Error::other)?;

        // Entries borrow the archive, so the library is buffered before the
        // archive handle goes out of scope.
        let bytes = match archive.by_name(path.trim_start_matches('/')) {
            Ok(mut entry) => {
                let mut bytes = Vec::with_capacity(preallocation(entry.size()));
                entry.read_to_end(&mut bytes)?;
                bytes
            }
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(io::Error::other(e)),
        };

        Ok(Some(Box::new(Cursor::new(bytes))))
    }
}

/// The declared size comes from the archive header and is not trusted.
fn preallocation(declared_size: u64) -> usize {
    usize::try_from(declared_size).map_or(MAX_PREALLOCATION, |size| size.min(MAX_PREALLOCATION))
}
