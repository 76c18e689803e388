//! Host environment detection for the GL capability probe.
//!
//! The probe only cares about which OS it runs on: macOS drivers are
//! queried through the legacy string interface, everything else through
//! the indexed one.

pub mod platform;

pub use platform::{Platform, PlatformError};
