//! `glow` backend
//!
//! Lets a `glow::Context` feed the probe directly.

use glow::HasContext;

use crate::query::GlQuery;

// SAFETY (all methods): glow's query calls are unsafe because they require a
// current context. The probe only calls in when the host has marked the
// context initialized, which is the caller's contract on
// `CapabilityProbe::new`.
impl GlQuery for glow::Context {
    fn get_error(&self) -> u32 {
        unsafe { <Self as HasContext>::get_error(self) }
    }

    fn get_string(&self, name: u32) -> String {
        unsafe { self.get_parameter_string(name) }
    }

    fn get_string_indexed(&self, name: u32, index: u32) -> String {
        unsafe { self.get_parameter_indexed_string(name, index) }
    }

    fn get_integer(&self, name: u32) -> i32 {
        unsafe { self.get_parameter_i32(name) }
    }

    fn binding_version(&self) -> Option<String> {
        Some("glow".to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::query;

    // glow exports the same enumerants; keep the hand-written table honest.
    #[test]
    fn constants_match_glow() {
        assert_eq!(query::NO_ERROR, glow::NO_ERROR);
        assert_eq!(query::VERSION, glow::VERSION);
        assert_eq!(query::RENDERER, glow::RENDERER);
        assert_eq!(query::EXTENSIONS, glow::EXTENSIONS);
        assert_eq!(query::NUM_EXTENSIONS, glow::NUM_EXTENSIONS);
        assert_eq!(query::SHADING_LANGUAGE_VERSION, glow::SHADING_LANGUAGE_VERSION);
        assert_eq!(query::NUM_SHADING_LANGUAGE_VERSIONS, glow::NUM_SHADING_LANGUAGE_VERSIONS);
        assert_eq!(query::MAJOR_VERSION, glow::MAJOR_VERSION);
        assert_eq!(query::MINOR_VERSION, glow::MINOR_VERSION);
    }
}
