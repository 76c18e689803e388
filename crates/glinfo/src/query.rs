//! Native query surface
//!
//! The probe only needs four entry points of the GL API. They are expressed
//! as a trait so the probe can run against any binding (or a fake in tests).

pub const NO_ERROR: u32 = 0;

pub const RENDERER: u32 = 0x1F01;
pub const VERSION: u32 = 0x1F02;
pub const EXTENSIONS: u32 = 0x1F03;
pub const SHADING_LANGUAGE_VERSION: u32 = 0x8B8C;

pub const MAJOR_VERSION: u32 = 0x821B;
pub const MINOR_VERSION: u32 = 0x821C;
pub const NUM_EXTENSIONS: u32 = 0x821D;
pub const NUM_SHADING_LANGUAGE_VERSIONS: u32 = 0x82E9;

/// Read-only access to a GL context's state queries.
///
/// Implementations may assume the context is current on the calling thread;
/// the probe only calls in when its `initialized` flag is set.
pub trait GlQuery {
    /// `glGetError`
    fn get_error(&self) -> u32;

    /// `glGetString`
    fn get_string(&self, name: u32) -> String;

    /// `glGetStringi`
    fn get_string_indexed(&self, name: u32, index: u32) -> String;

    /// `glGetIntegerv` for a single-valued parameter.
    fn get_integer(&self, name: u32) -> i32;

    /// Name (and version, if known) of the binding library behind this context.
    fn binding_version(&self) -> Option<String> {
        None
    }
}

impl<G: GlQuery + ?Sized> GlQuery for &G {
    fn get_error(&self) -> u32 {
        (**self).get_error()
    }

    fn get_string(&self, name: u32) -> String {
        (**self).get_string(name)
    }

    fn get_string_indexed(&self, name: u32, index: u32) -> String {
        (**self).get_string_indexed(name, index)
    }

    fn get_integer(&self, name: u32) -> i32 {
        (**self).get_integer(name)
    }

    fn binding_version(&self) -> Option<String> {
        (**self).binding_version()
    }
}

/// Stand-in for hosts that have no GL context yet. Answers every query with
/// `GL_NO_ERROR`, an empty string or zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullContext;

impl GlQuery for NullContext {
    fn get_error(&self) -> u32 {
        NO_ERROR
    }

    fn get_string(&self, _name: u32) -> String {
        String::new()
    }

    fn get_string_indexed(&self, _name: u32, _index: u32) -> String {
        String::new()
    }

    fn get_integer(&self, _name: u32) -> i32 {
        0
    }
}

/// Integer replies for counts and versions are never meaningfully negative.
pub(crate) fn non_negative(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
