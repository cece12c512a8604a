//! Common test utilities: in-memory fakes for the loading ports.

#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use systemhook_core::{
    HostEnvironment, LibraryNaming, LinkError, NativeLoader, ResourceProvider, ResourceStream,
};
use systemhook_runtime::EmbeddedResources;

/// Resource path of the Linux/amd64 bundle under Unix naming.
pub const LINUX_AMD64_RESOURCE: &str = "systemhook/lib/libsystemhook-linux-amd64.so";

pub fn linux_amd64() -> HostEnvironment {
    HostEnvironment::new("Linux", "amd64")
}

pub const fn unix_naming() -> LibraryNaming {
    LibraryNaming::UNIX
}

/// Every call made to a [`RecordingLoader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadCall {
    Name(String),
    Path(PathBuf),
}

/// Loader that records calls and accepts a configurable set of targets.
#[derive(Debug, Default)]
pub struct RecordingLoader {
    accept_names: Vec<String>,
    accept_paths: Vec<PathBuf>,
    accept_bundled: bool,
    calls: Mutex<Vec<LoadCall>>,
}

impl RecordingLoader {
    pub fn rejecting_everything() -> Self {
        Self::default()
    }

    pub fn accepting_bundled() -> Self {
        Self {
            accept_bundled: true,
            ..Self::default()
        }
    }

    pub fn accepting_name(name: &str) -> Self {
        Self {
            accept_names: vec![name.to_string()],
            ..Self::default()
        }
    }

    pub fn accepting_path(path: impl Into<PathBuf>) -> Self {
        Self {
            accept_paths: vec![path.into()],
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<LoadCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls that loaded an extracted bundle.
    pub fn bundled_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, LoadCall::Path(path) if is_bundled(path)))
            .count()
    }
}

fn is_bundled(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with("systemhook+"))
}

impl NativeLoader for RecordingLoader {
    fn load_by_name(&self, name: &str) -> Result<(), LinkError> {
        self.calls.lock().unwrap().push(LoadCall::Name(name.to_string()));
        if self.accept_names.iter().any(|accepted| accepted == name) {
            Ok(())
        } else {
            Err(LinkError::new(name, "cannot open shared object file"))
        }
    }

    fn load_path(&self, path: &Path) -> Result<(), LinkError> {
        self.calls.lock().unwrap().push(LoadCall::Path(path.to_path_buf()));
        if self.accept_paths.iter().any(|accepted| accepted == path)
            || (self.accept_bundled && is_bundled(path))
        {
            Ok(())
        } else {
            Err(LinkError::new(path.to_string_lossy(), "invalid ELF header"))
        }
    }
}

/// Resource provider that counts lookups.
#[derive(Debug)]
pub struct CountingResources {
    inner: EmbeddedResources,
    opens: AtomicUsize,
}

impl CountingResources {
    pub fn new(inner: EmbeddedResources) -> Self {
        Self {
            inner,
            opens: AtomicUsize::new(0),
        }
    }

    /// Provider serving `bytes` as the Linux/amd64 bundle.
    pub fn linux_amd64(bytes: &[u8]) -> Self {
        Self::new(EmbeddedResources::new().with(LINUX_AMD64_RESOURCE, bytes.to_vec()))
    }

    pub fn empty() -> Self {
        Self::new(EmbeddedResources::new())
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

impl ResourceProvider for CountingResources {
    fn open(&self, path: &str) -> io::Result<Option<ResourceStream<'_>>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        self.inner.open(path)
    }
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
