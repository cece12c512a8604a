//! Platform command handler.

use anyhow::Result;
use serde::Serialize;
use systemhook_core::{BASE_NAME, HostEnvironment, LibraryNaming, PlatformId, ResourceDescriptor};

/// What the loader sees on this host.
#[derive(Debug, Serialize)]
pub struct PlatformReport {
    pub host: HostEnvironment,
    pub platform: PlatformId,
    pub library_name: String,
    pub resource_path: String,
}

impl PlatformReport {
    pub fn new(host: HostEnvironment, naming: LibraryNaming) -> Self {
        let platform = host.platform_id();
        let descriptor = ResourceDescriptor::new(BASE_NAME, platform.clone(), naming);
        Self {
            host,
            platform,
            library_name: descriptor.file_name.clone(),
            resource_path: descriptor.resource_path(),
        }
    }

    pub fn detect() -> Self {
        Self::new(HostEnvironment::detect(), LibraryNaming::host())
    }
}

/// Execute the platform command.
pub fn execute(json: bool) -> Result<()> {
    let report = PlatformReport::detect();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("os_name = {}", report.host.os_name);
        println!("os_arch = {}", report.host.arch);
        println!("platform = {}", report.platform);
        println!("library_name = {}", report.library_name);
        println!("resource_path = {}", report.resource_path);
    }
    Ok(())
}
