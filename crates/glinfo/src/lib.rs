//! glinfo: OpenGL capability probe
//!
//! Reads version, renderer, shading-language and extension information from
//! a live GL context and turns it into a [`CapabilityReport`].
//!
//! The context is never owned here. Callers pass anything implementing
//! [`GlQuery`] (enable the `glow` feature for a `glow::Context` impl) and
//! tell the probe whether it is current via the `initialized` flag.
//!
//! ```ignore
//! use glinfo::{CapabilityProbe, Platform};
//!
//! let probe = CapabilityProbe::new(&gl, Platform::current(), true);
//! if !probe.meets_minimum_version() {
//!     tracing::error!("GL {} is too old", probe.current_version());
//! }
//! println!("{}", probe.render_report_text());
//! ```

#[cfg(feature = "glow")]
pub mod backend;
pub mod errors;
pub mod probe;
pub mod query;
pub mod report;
pub mod settings;
pub mod version;

#[cfg(test)]
pub(crate) mod fake;

pub use errors::{drain_errors, drain_errors_logged, GlError, ProbeError, MAX_DRAINED_ERRORS};
pub use glinfo_env::Platform;
pub use probe::{CapabilityProbe, QueryDialect, NOT_INITIALIZED};
pub use query::{GlQuery, NullContext};
pub use report::CapabilityReport;
pub use settings::ProbeSettings;
pub use version::VersionTuple;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
