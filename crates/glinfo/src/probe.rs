//! Capability probe
//!
//! Wraps a borrowed GL context and answers version / renderer / extension
//! questions. When the context is not initialized every query returns an
//! inert default instead of touching the driver.

use glinfo_env::Platform;
use tracing::debug;

use crate::errors::drain_errors_logged;
use crate::query::{self, non_negative, GlQuery, NullContext};
use crate::report::CapabilityReport;
use crate::settings::ProbeSettings;
use crate::version::VersionTuple;

/// Returned for driver and renderer strings without a context.
pub const NOT_INITIALIZED: &str = "not initialized";

/// How capability lists and versions are read from the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryDialect {
    /// Space-separated `glGetString` replies, version parsed from text.
    Legacy,
    /// `GL_NUM_*` counts plus `glGetStringi`, version from integers.
    Modern,
}

impl QueryDialect {
    pub const fn for_platform(platform: Platform) -> Self {
        if platform.uses_legacy_queries() {
            QueryDialect::Legacy
        } else {
            QueryDialect::Modern
        }
    }

    /// Lowest GL version the host application accepts under this dialect.
    pub const fn min_version(self) -> VersionTuple {
        match self {
            QueryDialect::Legacy => VersionTuple::new(2, 1),
            QueryDialect::Modern => VersionTuple::new(3, 3),
        }
    }
}

pub struct CapabilityProbe<'a, G: GlQuery + ?Sized> {
    gl: &'a G,
    platform: Platform,
    dialect: QueryDialect,
    initialized: bool,
    drain_before_report: bool,
}

impl CapabilityProbe<'static, NullContext> {
    /// Probe for a host that has not created a context. Reports defaults only.
    pub fn detached(platform: Platform) -> Self {
        static NULL: NullContext = NullContext;
        CapabilityProbe::new(&NULL, platform, false)
    }
}

impl<'a, G: GlQuery + ?Sized> CapabilityProbe<'a, G> {
    /// `initialized` must only be true while `gl` is current on this thread.
    pub fn new(gl: &'a G, platform: Platform, initialized: bool) -> Self {
        Self {
            gl,
            platform,
            dialect: QueryDialect::for_platform(platform),
            initialized,
            drain_before_report: false,
        }
    }

    pub fn from_settings(gl: &'a G, settings: &ProbeSettings) -> Self {
        Self {
            drain_before_report: settings.drain_errors_before_report,
            ..Self::new(gl, settings.resolved_platform(), settings.initialized)
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn dialect(&self) -> QueryDialect {
        self.dialect
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn min_version(&self) -> VersionTuple {
        self.dialect.min_version()
    }

    /// Highest GL version the context supports, (0, 0) if unknown.
    pub fn current_version(&self) -> VersionTuple {
        if !self.initialized {
            return VersionTuple::ZERO;
        }

        match self.dialect {
            QueryDialect::Legacy => {
                let raw = self.gl.get_string(query::VERSION);
                VersionTuple::parse_leading(&raw).unwrap_or_else(|| {
                    debug!(version = %raw, "unparseable GL version string");
                    VersionTuple::ZERO
                })
            }
            QueryDialect::Modern => VersionTuple::new(
                non_negative(self.gl.get_integer(query::MAJOR_VERSION)),
                non_negative(self.gl.get_integer(query::MINOR_VERSION)),
            ),
        }
    }

    pub fn meets_minimum_version(&self) -> bool {
        self.current_version() >= self.min_version()
    }

    pub fn extensions(&self) -> Vec<String> {
        if !self.initialized {
            return Vec::new();
        }

        match self.dialect {
            QueryDialect::Legacy => self
                .gl
                .get_string(query::EXTENSIONS)
                .split_whitespace()
                .map(str::to_owned)
                .collect(),
            QueryDialect::Modern => self.indexed_strings(query::NUM_EXTENSIONS, query::EXTENSIONS),
        }
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions().iter().any(|extension| extension == name)
    }

    pub fn shading_language_versions(&self) -> Vec<String> {
        if !self.initialized {
            return Vec::new();
        }

        match self.dialect {
            QueryDialect::Legacy => {
                let version = self.gl.get_string(query::SHADING_LANGUAGE_VERSION);
                if version.is_empty() {
                    Vec::new()
                } else {
                    vec![version]
                }
            }
            QueryDialect::Modern => self.indexed_strings(
                query::NUM_SHADING_LANGUAGE_VERSIONS,
                query::SHADING_LANGUAGE_VERSION,
            ),
        }
    }

    /// Raw `GL_VERSION` string.
    pub fn driver_version_string(&self) -> String {
        self.string_or_sentinel(query::VERSION)
    }

    /// Raw `GL_RENDERER` string.
    pub fn renderer_string(&self) -> String {
        self.string_or_sentinel(query::RENDERER)
    }

    pub fn build_report(&self) -> CapabilityReport {
        if self.initialized && self.drain_before_report {
            drain_errors_logged(self.gl);
        }

        let report = CapabilityReport {
            min_version: self.min_version(),
            version: self.current_version(),
            card: self.driver_version_string(),
            renderer: self.renderer_string(),
            languages: self.shading_language_versions(),
            extensions: self.extensions(),
        };
        debug!(
            platform = %self.platform,
            initialized = self.initialized,
            version = %report.version,
            extensions = report.extensions.len(),
            "built GL capability report"
        );
        report
    }

    /// Binding library label. Does not touch the context.
    pub fn binding_version(&self) -> Option<String> {
        self.gl.binding_version()
    }

    pub fn render_report_text(&self) -> String {
        self.build_report().render_text()
    }

    fn string_or_sentinel(&self, name: u32) -> String {
        if self.initialized {
            self.gl.get_string(name)
        } else {
            NOT_INITIALIZED.to_string()
        }
    }

    /// Read `count_name`, then fetch `name` at indices `0..count` in order.
    fn indexed_strings(&self, count_name: u32, name: u32) -> Vec<String> {
        let count = non_negative(self.gl.get_integer(count_name));
        (0..count)
            .map(|index| self.gl.get_string_indexed(name, index))
            .collect()
    }
}
