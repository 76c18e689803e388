//! Capability report snapshot and its text rendering

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::VersionTuple;

/// One snapshot of what the driver reported. Built fresh on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityReport {
    pub min_version: VersionTuple,
    pub version: VersionTuple,
    pub card: String,
    pub renderer: String,
    pub languages: Vec<String>,
    pub extensions: Vec<String>,
}

impl CapabilityReport {
    pub fn meets_minimum_version(&self) -> bool {
        self.version >= self.min_version
    }

    /// Lightweight-markup rendering (`<br>` line breaks, `<p>` sections)
    /// for rich-text labels.
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for CapabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Minimum version demanded: {}", self.min_version.to_pair_string())?;
        write!(f, "<br>Highest version available: {}", self.version.to_pair_string())?;
        write!(f, "<br>Card Driver: {}", self.card)?;
        write!(f, "<br>Renderer: {}", self.renderer)?;

        f.write_str("<p>Shading languages:")?;
        for language in &self.languages {
            write!(f, "<br>{language}")?;
        }

        f.write_str("<p>Extensions:")?;
        for extension in &self.extensions {
            write!(f, "<br>{extension}")?;
        }
        Ok(())
    }
}
