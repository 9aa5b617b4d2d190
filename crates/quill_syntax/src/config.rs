//! Parameter-list parsing configuration

/// Options for parsing a parameter list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentListConfig {
    /// Whether a variable may carry a `: <annotation>`
    pub parse_annotations: bool,
    /// Whether a variable may carry a `= <initializer>`
    pub parse_initializers: bool,
}

impl Default for ArgumentListConfig {
    fn default() -> Self {
        Self {
            parse_annotations: true,
            parse_initializers: true,
        }
    }
}

impl ArgumentListConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable annotations
    pub fn with_annotations(mut self, enabled: bool) -> Self {
        self.parse_annotations = enabled;
        self
    }

    /// Enable or disable initializers
    pub fn with_initializers(mut self, enabled: bool) -> Self {
        self.parse_initializers = enabled;
        self
    }
}
