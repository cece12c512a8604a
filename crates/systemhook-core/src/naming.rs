//! Platform decoration of shared library file names.

use std::env;

/// Legacy extensions and the canonical extension that replaces them.
///
/// `.jnilib` was the historical macOS JNI suffix; current toolchains produce
/// `.dylib`.
pub const LEGACY_EXTENSIONS: &[(&str, &str)] = &[(".jnilib", ".dylib")];

/// Prefix/suffix convention for shared library file names on one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryNaming {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl LibraryNaming {
    pub const WINDOWS: Self = Self {
        prefix: "",
        suffix: ".dll",
    };
    pub const DARWIN: Self = Self {
        prefix: "lib",
        suffix: ".dylib",
    };
    pub const UNIX: Self = Self {
        prefix: "lib",
        suffix: ".so",
    };

    /// Convention of the platform this binary was compiled for.
    pub const fn host() -> Self {
        Self {
            prefix: env::consts::DLL_PREFIX,
            suffix: env::consts::DLL_SUFFIX,
        }
    }

    /// Convention for a normalized OS family (see `normalize_os_name`).
    pub fn for_os_family(os_family: &str) -> Self {
        match os_family {
            "windows" => Self::WINDOWS,
            "darwin" => Self::DARWIN,
            _ => Self::UNIX,
        }
    }

    /// Decorate `base` into a library file name, e.g. `systemhook` into
    /// `libsystemhook.so`.
    pub fn decorate(&self, base: &str) -> String {
        normalize_legacy_extension(&format!("{}{}{}", self.prefix, base, self.suffix))
    }
}

impl Default for LibraryNaming {
    fn default() -> Self {
        Self::host()
    }
}

/// Replace a trailing legacy extension with its canonical counterpart.
pub fn normalize_legacy_extension(file_name: &str) -> String {
    for (legacy, canonical) in LEGACY_EXTENSIONS {
        if let Some(stem) = file_name.strip_suffix(legacy) {
            return format!("{stem}{canonical}");
        }
    }
    file_name.to_string()
}

/// Extension of a file name including the leading dot, or `""` when there is none.
pub fn file_extension(file_name: &str) -> &str {
    file_name.rfind('.').map_or("", |index| &file_name[index..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorates_per_family() {
        assert_eq!(
            LibraryNaming::for_os_family("linux").decorate("systemhook"),
            "libsystemhook.so"
        );
        assert_eq!(
            LibraryNaming::for_os_family("windows").decorate("systemhook"),
            "systemhook.dll"
        );
        assert_eq!(
            LibraryNaming::for_os_family("darwin").decorate("systemhook"),
            "libsystemhook.dylib"
        );
        assert_eq!(
            LibraryNaming::for_os_family("solaris").decorate("systemhook"),
            "libsystemhook.so"
        );
    }

    #[test]
    fn legacy_jnilib_becomes_dylib() {
        let legacy = LibraryNaming {
            prefix: "lib",
            suffix: ".jnilib",
        };
        assert_eq!(legacy.decorate("systemhook"), "libsystemhook.dylib");
        assert_eq!(normalize_legacy_extension("a.jnilib.so"), "a.jnilib.so");
    }

    #[test]
    fn host_matches_compile_target() {
        let name = LibraryNaming::host().decorate("systemhook");
        #[cfg(target_os = "windows")]
        assert_eq!(name, "systemhook.dll");
        #[cfg(target_os = "macos")]
        assert_eq!(name, "libsystemhook.dylib");
        #[cfg(target_os = "linux")]
        assert_eq!(name, "libsystemhook.so");
        assert!(name.contains("systemhook"));
    }

    #[test]
    fn extension_from_last_dot() {
        assert_eq!(file_extension("libsystemhook-linux-amd64.so"), ".so");
        assert_eq!(file_extension("libsystemhook.so.1"), ".1");
        assert_eq!(file_extension("systemhook"), "");
    }
}
