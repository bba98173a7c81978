use crate::utils::constants::DEFAULT_SCRIPT_INTERPRETER;

/// The toolchain data the *GYP* writer cares about
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Toolchain {
    pub name: String,
    /// Literal text injected at the top of every *GYP* file written with this
    /// toolchain as the representative one. Empty means no preamble
    pub gyp_header: String,
    pub script_interpreter: String,
}

impl Toolchain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gyp_header: String::new(),
            script_interpreter: DEFAULT_SCRIPT_INTERPRETER.to_owned(),
        }
    }

    pub fn with_gyp_header(mut self, gyp_header: impl Into<String>) -> Self {
        self.gyp_header = gyp_header.into();
        self
    }
}
