//! Operating system family and process bitness detection.

use serde::Serialize;

/// Platform identifiers, as reported by the host platform facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlatformId {
    Win32S,
    Win32Windows,
    Win32NT,
    WinCE,
    Unix,
    Xbox,
    MacOSX,
    Other,
}

crate::named_variants!(PlatformId {
    Win32S,
    Win32Windows,
    Win32NT,
    WinCE,
    Unix,
    Xbox,
    MacOSX,
    Other,
});

const WINDOWS_PLATFORM_IDS: [PlatformId; 4] = [
    PlatformId::Win32NT,
    PlatformId::Win32S,
    PlatformId::Win32Windows,
    PlatformId::WinCE,
];

const UNIX_TARGET_OSES: [&str; 12] = [
    "linux",
    "android",
    "freebsd",
    "openbsd",
    "netbsd",
    "dragonfly",
    "solaris",
    "illumos",
    "haiku",
    "aix",
    "hurd",
    "redox",
];

impl PlatformId {
    /// Platform of the running process.
    pub fn current() -> Self {
        Self::from_target_os(std::env::consts::OS)
    }

    /// Maps a Rust `target_os` value to a platform identifier.
    pub fn from_target_os(os: &str) -> Self {
        match os {
            "windows" => PlatformId::Win32NT,
            "macos" | "ios" => PlatformId::MacOSX,
            other if UNIX_TARGET_OSES.contains(&other) => PlatformId::Unix,
            _ => PlatformId::Other,
        }
    }

    /// Whether this identifier belongs to the Windows family.
    pub fn is_windows_family(self) -> bool {
        WINDOWS_PLATFORM_IDS.contains(&self)
    }
}

/// Whether the current operating system is Windows.
pub fn is_windows() -> bool {
    PlatformId::current().is_windows_family()
}

/// Whether the current process is a 64-bit process.
///
/// A 32-bit process can run on a 64-bit OS; this reports the process, which
/// is decided by the native pointer width it was compiled for.
#[inline]
pub fn is_process_64bit() -> bool {
    is_64bit_pointer_width(std::mem::size_of::<usize>())
}

/// Whether a native pointer of `bytes` bytes belongs to a 64-bit process.
#[inline]
pub fn is_64bit_pointer_width(bytes: usize) -> bool {
    bytes == 8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::enums::NamedVariants;

    #[test]
    fn test_windows_family() {
        for id in PlatformId::variants() {
            let expected = matches!(
                id,
                PlatformId::Win32S
                    | PlatformId::Win32Windows
                    | PlatformId::Win32NT
                    | PlatformId::WinCE
            );
            assert_eq!(id.is_windows_family(), expected, "{:?}", id);
        }
    }

    #[test]
    fn test_from_target_os() {
        assert_eq!(PlatformId::from_target_os("windows"), PlatformId::Win32NT);
        assert_eq!(PlatformId::from_target_os("macos"), PlatformId::MacOSX);
        assert_eq!(PlatformId::from_target_os("linux"), PlatformId::Unix);
        assert_eq!(PlatformId::from_target_os("freebsd"), PlatformId::Unix);
        assert_eq!(PlatformId::from_target_os("uefi"), PlatformId::Other);
    }

    #[test]
    fn test_is_windows_matches_target() {
        assert_eq!(is_windows(), cfg!(windows));
    }

    #[test]
    fn test_pointer_width() {
        assert!(is_64bit_pointer_width(8));
        assert!(!is_64bit_pointer_width(4));
        assert!(!is_64bit_pointer_width(2));
        assert!(!is_64bit_pointer_width(16));
    }

    #[test]
    fn test_is_process_64bit_matches_target() {
        assert_eq!(is_process_64bit(), cfg!(target_pointer_width = "64"));
    }
}
