//! High-level configuration API

use crate::error::{ApiError, Result};
use polarity_core::{DEFAULT_MARKER, POSITIVE_LABEL};

/// Configuration for polarity correction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_MARKER.to_string(),
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Sentence boundary marker used to split and rejoin documents
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Label a classifier must return for a sentence to count as positive
    pub fn positive_label(&self) -> &'static str {
        POSITIVE_LABEL
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the sentence boundary marker
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.separator.is_empty() {
            return Err(ApiError::Config(
                "sentence separator must not be empty".to_string(),
            ));
        }

        Ok(self.config)
    }
}
