//! Display configuration for formatted catalog and unit output
//!
//! Controls how unresolved attributes and enum labels are rendered. The
//! configuration can be loaded from a TOML file:
//!
//! ```toml
//! [display]
//! placeholder = "?"
//! normalize_labels = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a display configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Placeholder used for attributes that resolve to nothing
pub const DEFAULT_PLACEHOLDER: &str = "-";

/// Options that affect rendering only, never resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Text rendered in place of an unresolved attribute
    pub placeholder: String,
    /// Render every enum label in lowercase (`Built::No` prints `no` instead of `NO`)
    pub normalize_labels: bool,
}

/// TOML structure for deserializing a config file
#[derive(Deserialize)]
struct TomlConfig {
    display: Option<TomlDisplay>,
}

#[derive(Deserialize)]
struct TomlDisplay {
    placeholder: Option<String>,
    normalize_labels: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            normalize_labels: false,
        }
    }
}

impl DisplayConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Keys missing from the `[display]` table keep their defaults.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(display) = parsed.display {
            if let Some(placeholder) = display.placeholder {
                config.placeholder = placeholder;
            }
            if let Some(normalize) = display.normalize_labels {
                config.normalize_labels = normalize;
            }
        }

        Ok(config)
    }

    /// Set the placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Enable or disable label normalization
    pub fn with_normalized_labels(mut self, normalize: bool) -> Self {
        self.normalize_labels = normalize;
        self
    }

    /// Apply label normalization to an enum label
    pub fn label(&self, label: &str) -> String {
        if self.normalize_labels {
            label.to_lowercase()
        } else {
            label.to_string()
        }
    }
}
