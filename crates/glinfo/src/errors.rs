//! Error types and GL error-queue draining

use std::path::PathBuf;

use glinfo_env::PlatformError;
use thiserror::Error;
use tracing::warn;

use crate::query::{self, GlQuery};

/// Upper bound on polls per drain. A lost context may keep answering
/// `GL_CONTEXT_LOST` indefinitely.
pub const MAX_DRAINED_ERRORS: usize = 64;

/// A pending code from the GL error queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GlError {
    #[error("GL_INVALID_ENUM")]
    InvalidEnum,
    #[error("GL_INVALID_VALUE")]
    InvalidValue,
    #[error("GL_INVALID_OPERATION")]
    InvalidOperation,
    #[error("GL_STACK_OVERFLOW")]
    StackOverflow,
    #[error("GL_STACK_UNDERFLOW")]
    StackUnderflow,
    #[error("GL_OUT_OF_MEMORY")]
    OutOfMemory,
    #[error("GL_INVALID_FRAMEBUFFER_OPERATION")]
    InvalidFramebufferOperation,
    #[error("GL_CONTEXT_LOST")]
    ContextLost,
    #[error("unknown GL error 0x{0:04X}")]
    Unknown(u32),
}

impl GlError {
    /// Decode a `glGetError` reply. `None` for `GL_NO_ERROR`.
    pub fn from_code(code: u32) -> Option<Self> {
        let error = match code {
            query::NO_ERROR => return None,
            0x0500 => GlError::InvalidEnum,
            0x0501 => GlError::InvalidValue,
            0x0502 => GlError::InvalidOperation,
            0x0503 => GlError::StackOverflow,
            0x0504 => GlError::StackUnderflow,
            0x0505 => GlError::OutOfMemory,
            0x0506 => GlError::InvalidFramebufferOperation,
            0x0507 => GlError::ContextLost,
            other => GlError::Unknown(other),
        };
        Some(error)
    }

    pub fn code(self) -> u32 {
        match self {
            GlError::InvalidEnum => 0x0500,
            GlError::InvalidValue => 0x0501,
            GlError::InvalidOperation => 0x0502,
            GlError::StackOverflow => 0x0503,
            GlError::StackUnderflow => 0x0504,
            GlError::OutOfMemory => 0x0505,
            GlError::InvalidFramebufferOperation => 0x0506,
            GlError::ContextLost => 0x0507,
            GlError::Unknown(code) => code,
        }
    }
}

/// Errors from the fallible setup paths (platform selection, settings).
/// Probe queries themselves never fail.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("failed to read settings from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid probe settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Poll `glGetError` until the queue reports `GL_NO_ERROR`, handing each
/// pending code to `sink`. Returns how many codes were drained.
///
/// Stops after [`MAX_DRAINED_ERRORS`] polls even if the queue never clears.
pub fn drain_errors<G, F>(gl: &G, mut sink: F) -> usize
where
    G: GlQuery + ?Sized,
    F: FnMut(GlError),
{
    let mut drained = 0;
    while drained < MAX_DRAINED_ERRORS {
        match GlError::from_code(gl.get_error()) {
            Some(error) => {
                sink(error);
                drained += 1;
            }
            None => return drained,
        }
    }
    warn!(polls = drained, "GL error queue did not clear");
    drained
}

/// [`drain_errors`] with each code logged at `warn`.
pub fn drain_errors_logged<G>(gl: &G) -> usize
where
    G: GlQuery + ?Sized,
{
    drain_errors(gl, |error| warn!(code = error.code(), "pending GL error: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{Call, FakeGl};

    #[test]
    fn drains_until_no_error() {
        let gl = FakeGl::new().with_errors(&[0x0502, 0x0500]);
        let mut seen = Vec::new();

        let drained = drain_errors(&gl, |error| seen.push(error));

        assert_eq!(drained, 2);
        assert_eq!(seen, vec![GlError::InvalidOperation, GlError::InvalidEnum]);
        assert_eq!(gl.calls(), vec![Call::Error, Call::Error, Call::Error]);
    }

    #[test]
    fn empty_queue_polls_once() {
        let gl = FakeGl::new();
        let drained = drain_errors(&gl, |_| panic!("no error expected"));
        assert_eq!(drained, 0);
        assert_eq!(gl.calls(), vec![Call::Error]);
    }

    #[test]
    fn stuck_queue_stops_at_bound() {
        let gl = FakeGl::new().with_sticky_error(0x0507);
        let mut count = 0;

        let drained = drain_errors(&gl, |error| {
            assert_eq!(error, GlError::ContextLost);
            count += 1;
        });

        assert_eq!(drained, MAX_DRAINED_ERRORS);
        assert_eq!(count, MAX_DRAINED_ERRORS);
        assert_eq!(gl.calls().len(), MAX_DRAINED_ERRORS);
    }

    #[test]
    fn logged_drain_clears_queue() {
        let gl = FakeGl::new().with_errors(&[0x0505]);
        assert_eq!(drain_errors_logged(&gl), 1);
        assert_eq!(drain_errors_logged(&gl), 0);
    }

    #[test]
    fn codes_round_trip() {
        assert_eq!(GlError::from_code(0), None);
        for code in 0x0500..=0x0507 {
            let error = GlError::from_code(code).unwrap();
            assert_eq!(error.code(), code);
            assert!(!matches!(error, GlError::Unknown(_)));
        }
        assert_eq!(GlError::from_code(0x1234), Some(GlError::Unknown(0x1234)));
        assert_eq!(GlError::Unknown(0x1234).to_string(), "unknown GL error 0x1234");
    }

    #[test]
    fn platform_error_converts() {
        let err: ProbeError = glinfo_env::Platform::from_index(7).unwrap_err().into();
        assert!(matches!(err, ProbeError::Platform(_)));
        assert!(err.to_string().contains("7"));
    }
}
