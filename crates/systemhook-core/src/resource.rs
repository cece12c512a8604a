//! Identification of the bundled, platform-qualified library.

use crate::naming::{LibraryNaming, file_extension};
use crate::platform::PlatformId;

/// Base identifier of the native library.
pub const BASE_NAME: &str = "systemhook";

/// Namespace under which bundled libraries live (`{namespace}/lib/{file}`).
pub const RESOURCE_NAMESPACE: &str = "systemhook";

/// Describes which bundled artifact to extract for a platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub base_name: String,
    pub platform: PlatformId,
    /// Decorated file name, e.g. `libsystemhook-linux-amd64.so`.
    pub file_name: String,
    /// Extension of `file_name` including the dot, e.g. `.so`.
    pub file_extension: String,
}

impl ResourceDescriptor {
    pub fn new(base_name: &str, platform: PlatformId, naming: LibraryNaming) -> Self {
        let file_name = naming.decorate(&format!(
            "{}-{}-{}",
            base_name, platform.os_family, platform.arch
        ));
        let file_extension = file_extension(&file_name).to_string();
        Self {
            base_name: base_name.to_string(),
            platform,
            file_name,
            file_extension,
        }
    }

    /// Virtual path of the artifact inside the resource namespace.
    pub fn resource_path(&self) -> String {
        format!("{RESOURCE_NAMESPACE}/lib/{}", self.file_name)
    }

    /// Prefix for the temporary file written during extraction.
    pub fn temp_prefix(&self) -> String {
        format!("{}-", self.base_name)
    }

    /// Content-addressed file name for an artifact with the given checksum.
    pub fn final_file_name(&self, checksum: u32) -> String {
        format!("{}+{}{}", self.base_name, checksum, self.file_extension)
    }
}
