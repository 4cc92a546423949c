//! Host platform identity.
//!
//! The platform is probed once per process and never changes afterwards.
//! Anything that is not one of the known operating systems is `Other`,
//! which the gate treats as unknown rather than as a failure.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Operating system a build runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HostPlatform {
    Windows,
    Linux,
    Darwin,
    FreeBSD,
    Other,
}

/// Probed on first use.
static CURRENT: LazyLock<HostPlatform> =
    LazyLock::new(|| HostPlatform::from_os(std::env::consts::OS));

impl HostPlatform {
    /// All platforms, in display order.
    pub const ALL: [HostPlatform; 5] = [
        HostPlatform::Windows,
        HostPlatform::Linux,
        HostPlatform::Darwin,
        HostPlatform::FreeBSD,
        HostPlatform::Other,
    ];

    /// Get the platform this process is running on.
    ///
    /// Repeated calls return the same value for the lifetime of the process.
    pub fn current() -> Self {
        *CURRENT
    }

    /// Map a Rust OS identifier (as in `std::env::consts::OS`) to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => HostPlatform::Windows,
            "linux" => HostPlatform::Linux,
            "macos" => HostPlatform::Darwin,
            "freebsd" => HostPlatform::FreeBSD,
            _ => HostPlatform::Other,
        }
    }

    /// Get the platform name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HostPlatform::Windows => "Windows",
            HostPlatform::Linux => "Linux",
            HostPlatform::Darwin => "Darwin",
            HostPlatform::FreeBSD => "FreeBSD",
            HostPlatform::Other => "Other",
        }
    }

    /// Whether the platform is one the gate can reason about.
    pub fn is_known(&self) -> bool {
        !matches!(self, HostPlatform::Other)
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostPlatform {
    type Err = HostPlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(HostPlatform::Windows),
            "linux" => Ok(HostPlatform::Linux),
            "darwin" | "macos" | "osx" => Ok(HostPlatform::Darwin),
            "freebsd" => Ok(HostPlatform::FreeBSD),
            "other" => Ok(HostPlatform::Other),
            _ => Err(HostPlatformParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown platform name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid platform '{0}', valid values: windows, linux, darwin, freebsd, other")]
pub struct HostPlatformParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os() {
        assert_eq!(HostPlatform::from_os("windows"), HostPlatform::Windows);
        assert_eq!(HostPlatform::from_os("linux"), HostPlatform::Linux);
        assert_eq!(HostPlatform::from_os("macos"), HostPlatform::Darwin);
        assert_eq!(HostPlatform::from_os("freebsd"), HostPlatform::FreeBSD);
        assert_eq!(HostPlatform::from_os("openbsd"), HostPlatform::Other);
        assert_eq!(HostPlatform::from_os(""), HostPlatform::Other);
    }

    #[test]
    fn test_current_is_stable() {
        let first = HostPlatform::current();
        for _ in 0..10 {
            assert_eq!(HostPlatform::current(), first);
        }
    }

    #[test]
    fn test_current_matches_build_target() {
        let expected = if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else if cfg!(target_os = "linux") {
            HostPlatform::Linux
        } else if cfg!(target_os = "macos") {
            HostPlatform::Darwin
        } else if cfg!(target_os = "freebsd") {
            HostPlatform::FreeBSD
        } else {
            HostPlatform::Other
        };
        assert_eq!(HostPlatform::current(), expected);
    }

    #[test]
    fn test_parse_and_display() {
        for platform in HostPlatform::ALL {
            assert_eq!(
                platform.to_string().parse::<HostPlatform>().unwrap(),
                platform
            );
        }
        assert_eq!(
            "macOS".parse::<HostPlatform>().unwrap(),
            HostPlatform::Darwin
        );
        assert!("plan9".parse::<HostPlatform>().is_err());
    }

    #[test]
    fn test_other_is_unknown() {
        assert!(!HostPlatform::Other.is_known());
        assert!(HostPlatform::Linux.is_known());
    }
}
