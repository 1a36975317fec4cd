//! Core error types

use thiserror::Error;

/// Error type produced by a classification capability
pub type ClassifierError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core errors
///
/// The consistency filter itself is total and never fails. Errors only come
/// from the classification capability or from malformed segmentation input.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The classification capability failed for a sentence
    #[error("classification failed for sentence {index}: {source}")]
    ClassificationFailure {
        /// Position of the sentence in the input sequence
        index: usize,
        /// Error reported by the classifier
        source: ClassifierError,
    },

    /// Sentence boundary marker was empty
    #[error("sentence boundary marker must not be empty")]
    EmptyMarker,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
