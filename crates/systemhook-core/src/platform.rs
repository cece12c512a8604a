//! Platform identification.
//!
//! Raw OS and architecture strings reported by the host are folded into a
//! small, closed vocabulary (`linux`, `windows`, `darwin`, `solaris` and
//! `x86`, `amd64`, `arm`, `sparc`, `sparc64`, `ppc`, `ppc64`). Anything the
//! table does not recognise passes through lowercased, so normalization can
//! never fail; an unknown platform simply has no bundled library.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the reported OS name.
pub const ENV_OS_NAME: &str = "SYSTEMHOOK_OS_NAME";

/// Environment variable overriding the reported CPU architecture.
pub const ENV_OS_ARCH: &str = "SYSTEMHOOK_OS_ARCH";

/// Stand-in for an empty report so identifiers are never empty.
const UNKNOWN: &str = "unknown";

/// Raw OS name and architecture as reported by the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEnvironment {
    pub os_name: String,
    pub arch: String,
}

impl HostEnvironment {
    pub fn new(os_name: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os_name: os_name.into(),
            arch: arch.into(),
        }
    }

    /// Detect the host environment.
    ///
    /// Resolution order for each value:
    /// 1. `SYSTEMHOOK_OS_NAME` / `SYSTEMHOOK_OS_ARCH` (when set and not blank)
    /// 2. The names the host reports for itself (`Linux`, `Mac OS X`, `amd64`, ...)
    pub fn detect() -> Self {
        let os_name = non_blank_var(ENV_OS_NAME).unwrap_or_else(|| reported_os_name().to_string());
        let arch = non_blank_var(ENV_OS_ARCH).unwrap_or_else(|| reported_arch().to_string());
        Self { os_name, arch }
    }

    /// Normalize the raw strings into a [`PlatformId`].
    pub fn platform_id(&self) -> PlatformId {
        PlatformId::from_raw(&self.os_name, &self.arch)
    }
}

/// The OS name in the form the host itself reports it (`uname`-style family
/// names, `Mac OS X` for macOS).
const fn reported_os_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "Windows"
    } else if cfg!(target_os = "macos") {
        "Mac OS X"
    } else if cfg!(target_os = "linux") {
        "Linux"
    } else if cfg!(target_os = "solaris") || cfg!(target_os = "illumos") {
        "SunOS"
    } else {
        env::consts::OS
    }
}

/// The architecture in the form the host reports it.
///
/// 64-bit x86 Linux, Windows and Solaris hosts call themselves `amd64`; macOS
/// keeps `x86_64`. Every other target reports its compile-target name.
const fn reported_arch() -> &'static str {
    if cfg!(all(target_arch = "x86_64", not(target_os = "macos"))) {
        "amd64"
    } else {
        env::consts::ARCH
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Canonical `{os_family, arch}` pair used to qualify bundled libraries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformId {
    pub os_family: String,
    pub arch: String,
}

impl PlatformId {
    /// Normalize raw OS and architecture strings.
    pub fn from_raw(os_name: &str, arch: &str) -> Self {
        Self {
            os_family: normalize_os_name(os_name),
            arch: normalize_arch(arch),
        }
    }

    /// Identifier for the running host.
    pub fn current() -> Self {
        HostEnvironment::detect().platform_id()
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os_family, self.arch)
    }
}

/// Map an OS name onto its family.
///
/// Matching is a case-insensitive prefix match; unmatched names pass through
/// lowercased.
pub fn normalize_os_name(raw: &str) -> String {
    let os_name = raw.to_lowercase();
    if os_name.is_empty() {
        return UNKNOWN.to_string();
    }

    let family = if os_name.starts_with("windows") {
        "windows"
    } else if os_name.starts_with("linux") {
        "linux"
    } else if os_name.starts_with("mac os") {
        "darwin"
    } else if os_name.starts_with("sunos") || os_name.starts_with("solaris") {
        "solaris"
    } else {
        return os_name;
    };
    family.to_string()
}

/// Map a CPU architecture onto its canonical name.
///
/// Rules are tried in order; unmatched architectures (including `x86_64` and
/// `aarch64`) pass through lowercased.
pub fn normalize_arch(raw: &str) -> String {
    let arch = raw.to_lowercase();
    if arch.is_empty() {
        return UNKNOWN.to_string();
    }

    let canonical = if (arch.starts_with('i') || arch.starts_with('x')) && arch.ends_with("86") {
        "x86"
    } else if (arch == "i86" || arch.starts_with("amd")) && arch.ends_with("64") {
        "amd64"
    } else if arch.starts_with("arm") {
        "arm"
    } else if arch.starts_with("sparc") {
        if arch.ends_with("64") { "sparc64" } else { "sparc" }
    } else if arch.starts_with("ppc") {
        if arch.ends_with("64") { "ppc64" } else { "ppc" }
    } else {
        return arch;
    };
    canonical.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ENV_LOCK, EnvVarGuard};

    #[test]
    fn os_families() {
        assert_eq!(normalize_os_name("Windows 10"), "windows");
        assert_eq!(normalize_os_name("Windows Server 2019"), "windows");
        assert_eq!(normalize_os_name("Linux"), "linux");
        assert_eq!(normalize_os_name("Mac OS X"), "darwin");
        assert_eq!(normalize_os_name("SunOS"), "solaris");
        assert_eq!(normalize_os_name("Solaris"), "solaris");
    }

    #[test]
    fn unknown_os_passes_through_lowercased() {
        assert_eq!(normalize_os_name("FreeBSD"), "freebsd");
        assert_eq!(normalize_os_name("macos"), "macos");
        assert_eq!(normalize_os_name("Darwin"), "darwin");
    }

    #[test]
    fn x86_family() {
        assert_eq!(normalize_arch("x86"), "x86");
        assert_eq!(normalize_arch("i386"), "x86");
        assert_eq!(normalize_arch("i686"), "x86");
        // i86 ends in 86, so the first rule claims it
        assert_eq!(normalize_arch("i86"), "x86");
    }

    #[test]
    fn amd64_family() {
        assert_eq!(normalize_arch("amd64"), "amd64");
        assert_eq!(normalize_arch("AMD64"), "amd64");
    }

    #[test]
    fn x86_64_passes_through() {
        // Ends in 64 but neither starts with "amd" nor equals "i86", and does
        // not end in "86"
        assert_eq!(normalize_arch("x86_64"), "x86_64");
        assert_eq!(normalize_arch("aarch64"), "aarch64");
    }

    #[test]
    fn arm_sparc_ppc() {
        assert_eq!(normalize_arch("arm"), "arm");
        assert_eq!(normalize_arch("armv7l"), "arm");
        assert_eq!(normalize_arch("sparc"), "sparc");
        assert_eq!(normalize_arch("sparcv9"), "sparc");
        assert_eq!(normalize_arch("sparc64"), "sparc64");
        assert_eq!(normalize_arch("ppc"), "ppc");
        assert_eq!(normalize_arch("ppc64"), "ppc64");
        assert_eq!(normalize_arch("ppc64le"), "ppc");
    }

    #[test]
    fn normalization_is_total() {
        for raw in ["", "riscv64", "mips", "🦀", "   ", "s390x"] {
            let id = PlatformId::from_raw(raw, raw);
            assert!(!id.os_family.is_empty(), "empty os family for {raw:?}");
            assert!(!id.arch.is_empty(), "empty arch for {raw:?}");
        }
        assert_eq!(PlatformId::from_raw("", "").to_string(), "unknown-unknown");
    }

    #[test]
    fn display_joins_with_dash() {
        let id = PlatformId::from_raw("Linux", "amd64");
        assert_eq!(id.to_string(), "linux-amd64");
    }

    #[test]
    fn detect_honors_env_overrides() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _os = EnvVarGuard::set(ENV_OS_NAME, "SunOS");
        let _arch = EnvVarGuard::set(ENV_OS_ARCH, "sparcv9");

        let host = HostEnvironment::detect();
        assert_eq!(host, HostEnvironment::new("SunOS", "sparcv9"));
        assert_eq!(host.platform_id().to_string(), "solaris-sparc");
    }

    #[test]
    fn detect_ignores_blank_overrides() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _os = EnvVarGuard::set(ENV_OS_NAME, "  ");
        let _arch = EnvVarGuard::remove(ENV_OS_ARCH);

        let host = HostEnvironment::detect();
        assert_eq!(host.os_name, reported_os_name());
        assert_eq!(host.arch, reported_arch());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_host_reports_linux_family() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _os = EnvVarGuard::remove(ENV_OS_NAME);

        assert_eq!(PlatformId::current().os_family, "linux");
    }

    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    #[test]
    fn linux_x86_64_host_is_amd64() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _os = EnvVarGuard::remove(ENV_OS_NAME);
        let _arch = EnvVarGuard::remove(ENV_OS_ARCH);

        assert_eq!(HostEnvironment::detect(), HostEnvironment::new("Linux", "amd64"));
        assert_eq!(PlatformId::current().to_string(), "linux-amd64");
    }

    #[cfg(all(target_os = "macos", target_arch = "x86_64"))]
    #[test]
    fn macos_x86_64_host_keeps_x86_64() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _os = EnvVarGuard::remove(ENV_OS_NAME);
        let _arch = EnvVarGuard::remove(ENV_OS_ARCH);

        assert_eq!(PlatformId::current().to_string(), "darwin-x86_64");
    }

    #[test]
    fn reported_arch_never_extends_the_table() {
        // amd64 is already canonical, everything else goes through unchanged
        assert_eq!(normalize_arch(reported_arch()), reported_arch().to_lowercase());
    }
}
