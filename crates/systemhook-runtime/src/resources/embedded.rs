//! In-memory resource table.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::{self, Cursor};

use systemhook_core::{ResourceProvider, ResourceStream};

/// Bundled libraries held in memory.
///
/// ```ignore
/// let resources = EmbeddedResources::from_static(&[(
///     "systemhook/lib/libsystemhook-linux-amd64.so",
///     include_bytes!("../native/libsystemhook-linux-amd64.so"),
/// )]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    entries: HashMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_static(entries: &[(&str, &'static [u8])]) -> Self {
        let mut resources = Self::new();
        for (path, bytes) in entries {
            resources.insert(*path, *bytes);
        }
        resources
    }

    #[must_use]
    pub fn with(mut self, path: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        self.insert(path, bytes);
        self
    }

    /// Add or replace the artifact at `path`.
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) {
        self.entries.insert(path.into(), bytes.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceProvider for EmbeddedResources {
    fn open(&self, path: &str) -> io::Result<Option<ResourceStream<'_>>> {
        Ok(self
            .entries
            .get(path)
            .map(|bytes| Box::new(Cursor::new(bytes.as_ref())) as ResourceStream<'_>))
    }
}
