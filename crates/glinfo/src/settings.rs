//! Probe settings

use std::path::Path;

use glinfo_env::Platform;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ProbeError;

/// How a probe should be set up. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// `None` selects the platform the crate was built for.
    pub platform: Option<Platform>,
    /// Whether the host has a current GL context.
    pub initialized: bool,
    /// Drain and log stale GL errors before building a report.
    pub drain_errors_before_report: bool,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            platform: None,
            initialized: true,
            drain_errors_before_report: false,
        }
    }
}

impl ProbeSettings {
    pub fn from_json_str(json: &str) -> Result<Self, ProbeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProbeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ProbeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        info!(path = %path.display(), ?settings, "loaded probe settings");
        Ok(settings)
    }

    /// Override the platform with a numeric OS index (0 = Windows,
    /// 1 = Linux, 2 = macOS).
    pub fn with_platform_index(mut self, index: u8) -> Result<Self, ProbeError> {
        self.platform = Some(Platform::from_index(index)?);
        Ok(self)
    }

    pub fn resolved_platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }
}
