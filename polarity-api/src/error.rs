//! API error types

use polarity_core::CoreError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Core error, including classifier failures
    #[error(transparent)]
    Core(#[from] CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Check if the error came from the classification capability
    pub fn is_classification_failure(&self) -> bool {
        matches!(
            self,
            ApiError::Core(CoreError::ClassificationFailure { .. })
        )
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
