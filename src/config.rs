//! Configuration for rendering markup trees

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::tree::Spacer;

/// Errors that can occur when loading a render configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Options controlling how a document is serialized
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Spaces per nesting level
    pub indent: usize,

    /// Whether to prefix the output with an XML declaration
    pub standalone: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: 1,
            standalone: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the number of spaces per nesting level
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether output carries an XML declaration
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// The spacer for a document root
    pub fn spacer(&self) -> Spacer {
        Spacer::new(0, self.indent)
    }
}
