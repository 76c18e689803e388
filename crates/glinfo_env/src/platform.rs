// platform.rs
//! Host platform enumeration, numeric OS index conversion and compile-time
//! detection of the current target.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Operating system the GL context lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    #[serde(rename = "macos")]
    MacOs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("unknown platform index {0} (expected 0 = windows, 1 = linux, 2 = macos)")]
    UnknownIndex(u8),
}

impl Platform {
    /// Platform the crate was compiled for.
    pub const fn current() -> Self {
        current_impl()
    }

    /// Map the numeric OS index used by host applications
    /// (0 = Windows, 1 = Linux, 2 = macOS).
    pub fn from_index(index: u8) -> Result<Self, PlatformError> {
        match index {
            0 => Ok(Platform::Windows),
            1 => Ok(Platform::Linux),
            2 => Ok(Platform::MacOs),
            other => Err(PlatformError::UnknownIndex(other)),
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Platform::Windows => 0,
            Platform::Linux => 1,
            Platform::MacOs => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
        }
    }

    /// macOS contexts are probed through the string queries (GL 2.1 floor).
    pub const fn uses_legacy_queries(self) -> bool {
        matches!(self, Platform::MacOs)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Platform {
    type Error = PlatformError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Platform::from_index(index)
    }
}

/* -------------------------- Windows -------------------------- */

#[cfg(target_os = "windows")]
const fn current_impl() -> Platform {
    Platform::Windows
}

/* --------------------- macOS / iOS (Darwin) --------------------- */

#[cfg(any(target_os = "macos", target_os = "ios"))]
const fn current_impl() -> Platform {
    Platform::MacOs
}

/* --------------------- Linux / Android --------------------- */

#[cfg(any(target_os = "linux", target_os = "android"))]
const fn current_impl() -> Platform {
    Platform::Linux
}

/* --------------------- Other / Fallbacks --------------------- */

// BSDs and friends ship Mesa, which answers the indexed queries like Linux.
#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "ios",
    target_os = "linux",
    target_os = "android"
)))]
const fn current_impl() -> Platform {
    Platform::Linux
}
