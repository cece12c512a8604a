//! Materializing a bundled library as a content-addressed file.
//!
//! The artifact is streamed into a uniquely named temp file while its CRC-32
//! is computed, then promoted to `{base_name}+{crc32}{ext}` next to it. If that
//! name is already taken the content is identical (modulo CRC collisions,
//! which only cost a redundant load of a different build), so the new copy is
//! discarded. Concurrent processes race only on the final no-clobber persist.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use flate2::Crc;
use systemhook_core::{LoadError, LoadResult, ResourceDescriptor, ResourceProvider};
use tempfile::{Builder, TempPath};
use tracing::{debug, warn};

/// Size of each read/write chunk while streaming the artifact.
const CHUNK_SIZE: usize = 8 * 1024;

/// A bundled library materialized on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArtifact {
    /// Final, content-addressed location.
    pub path: PathBuf,
    /// CRC-32 of the artifact bytes.
    pub checksum: u32,
    /// `true` when a file with the same name already existed and the fresh
    /// copy was discarded.
    pub reused: bool,
}

/// Stream the artifact described by `descriptor` into `dir`.
pub(crate) fn extract(
    resources: &dyn ResourceProvider,
    descriptor: &ResourceDescriptor,
    dir: &Path,
) -> LoadResult<ExtractedArtifact> {
    let resource_path = descriptor.resource_path();
    let mut input = resources
        .open(&resource_path)
        .map_err(|source| LoadError::ResourceRead {
            resource_path: resource_path.clone(),
            source,
        })?
        .ok_or_else(|| LoadError::ResourceNotFound {
            file_name: descriptor.file_name.clone(),
            resource_path: resource_path.clone(),
        })?;

    let mut temp = Builder::new()
        .prefix(&descriptor.temp_prefix())
        .suffix(&descriptor.file_extension)
        .tempfile_in(dir)
        .map_err(|e| LoadError::extraction(dir, e))?;

    let checksum = stream_with_checksum(&mut input, temp.as_file_mut(), &resource_path)
        .map_err(|e| match e {
            StreamError::Read(source) => LoadError::ResourceRead {
                resource_path: resource_path.clone(),
                source,
            },
            StreamError::Write(source) => LoadError::extraction(temp.path(), source),
        })?;
    drop(input);

    // Closes the file handle; the path is still removed on drop.
    let temp_path = temp.into_temp_path();
    make_loadable(&temp_path)?;

    let final_path = dir.join(descriptor.final_file_name(checksum));
    let reused = promote(temp_path, &final_path)?;

    Ok(ExtractedArtifact {
        path: final_path,
        checksum,
        reused,
    })
}

enum StreamError {
    Read(io::Error),
    Write(io::Error),
}

fn stream_with_checksum(
    input: &mut dyn Read,
    output: &mut fs::File,
    resource_path: &str,
) -> Result<u32, StreamError> {
    let mut crc = Crc::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        let read = match input.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(StreamError::Read(e)),
        };
        output
            .write_all(&buffer[..read])
            .map_err(StreamError::Write)?;
        crc.update(&buffer[..read]);
    }
    output.flush().map_err(StreamError::Write)?;

    debug!(
        resource = resource_path,
        bytes = crc.amount(),
        checksum = crc.sum(),
        "Streamed bundled library"
    );
    Ok(crc.sum())
}

/// Give the extracted library the permissions the dynamic linker and other
/// users sharing the extraction directory expect.
#[cfg(unix)]
fn make_loadable(path: &Path) -> LoadResult<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| LoadError::extraction(path, e))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn make_loadable(_path: &Path) -> LoadResult<()> {
    Ok(())
}

/// Move the temp file to `final_path` unless that name is already taken.
///
/// Returns `true` when an existing file was reused.
fn promote(temp: TempPath, final_path: &Path) -> LoadResult<bool> {
    if final_path.exists() {
        debug!(path = %final_path.display(), "Reusing previously extracted library");
        discard(temp);
        return Ok(true);
    }

    match temp.persist_noclobber(final_path) {
        Ok(()) => {
            debug!(path = %final_path.display(), "Extracted bundled library");
            Ok(false)
        }
        Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
            debug!(path = %final_path.display(), "Another process extracted the library first");
            discard(err.path);
            Ok(true)
        }
        Err(err) => Err(LoadError::extraction(final_path, err.error)),
    }
}

fn discard(temp: TempPath) {
    let path = temp.to_path_buf();
    if let Err(e) = temp.close() {
        warn!(path = %path.display(), error = %e, "Failed to remove temporary library copy");
    }
}
