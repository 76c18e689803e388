//! Recording GlQuery double for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::query::{self, GlQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Error,
    String(u32),
    StringIndexed(u32, u32),
    Integer(u32),
}

#[derive(Default)]
pub struct FakeGl {
    strings: HashMap<u32, String>,
    indexed: HashMap<u32, Vec<String>>,
    integers: HashMap<u32, i32>,
    errors: RefCell<VecDeque<u32>>,
    sticky_error: Option<u32>,
    calls: RefCell<Vec<Call>>,
}

impl FakeGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// A driver answering the string queries only, as macOS legacy contexts do.
    pub fn legacy(version: &str, renderer: &str, glsl: &str, extensions: &str) -> Self {
        Self::new()
            .with_string(query::VERSION, version)
            .with_string(query::RENDERER, renderer)
            .with_string(query::SHADING_LANGUAGE_VERSION, glsl)
            .with_string(query::EXTENSIONS, extensions)
    }

    /// A core-profile driver with indexed extension and GLSL lists.
    pub fn modern(major: i32, minor: i32, glsl: &[&str], extensions: &[&str]) -> Self {
        Self::new()
            .with_string(query::VERSION, &format!("{major}.{minor}.0 Mesa 24.0.5"))
            .with_string(query::RENDERER, "Mesa Intel(R) UHD Graphics 620")
            .with_integer(query::MAJOR_VERSION, major)
            .with_integer(query::MINOR_VERSION, minor)
            .with_list(query::NUM_SHADING_LANGUAGE_VERSIONS, query::SHADING_LANGUAGE_VERSION, glsl)
            .with_list(query::NUM_EXTENSIONS, query::EXTENSIONS, extensions)
    }

    pub fn with_string(mut self, name: u32, value: &str) -> Self {
        self.strings.insert(name, value.to_string());
        self
    }

    pub fn with_integer(mut self, name: u32, value: i32) -> Self {
        self.integers.insert(name, value);
        self
    }

    pub fn with_list(mut self, count_name: u32, name: u32, values: &[&str]) -> Self {
        self.integers.insert(count_name, values.len() as i32);
        self.indexed.insert(name, values.iter().map(|v| v.to_string()).collect());
        self
    }

    pub fn with_errors(self, codes: &[u32]) -> Self {
        self.errors.borrow_mut().extend(codes.iter().copied());
        self
    }

    /// Report `code` on every poll once the queue is empty.
    pub fn with_sticky_error(mut self, code: u32) -> Self {
        self.sticky_error = Some(code);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl GlQuery for FakeGl {
    fn get_error(&self) -> u32 {
        self.record(Call::Error);
        self.errors
            .borrow_mut()
            .pop_front()
            .or(self.sticky_error)
            .unwrap_or(query::NO_ERROR)
    }

    fn get_string(&self, name: u32) -> String {
        self.record(Call::String(name));
        self.strings.get(&name).cloned().unwrap_or_default()
    }

    fn get_string_indexed(&self, name: u32, index: u32) -> String {
        self.record(Call::StringIndexed(name, index));
        self.indexed
            .get(&name)
            .and_then(|values| values.get(index as usize))
            .cloned()
            .unwrap_or_default()
    }

    fn get_integer(&self, name: u32) -> i32 {
        self.record(Call::Integer(name));
        self.integers.get(&name).copied().unwrap_or(0)
    }
}
