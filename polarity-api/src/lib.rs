//! Public API for sentiment polarity correction
//!
//! This crate wires the classifier adapter and the consistency filter into
//! a single document-level operation and exposes stable DTOs for callers.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use dto::{Metadata, SentenceDTO};
use polarity_core::{
    join_sentences_with, split_sentences_with, ClassifierAdapter, ConsistencyFilter,
};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Output};
pub use error::{ApiError, Result};
pub use polarity_core::{
    join_sentences, split_sentences, ClassifierError, FnClassifier, LabelClassifier, Polarity,
    SentenceClassifier,
};

/// Main entry point for polarity correction
///
/// Splits a document into sentences, classifies each sentence once in order,
/// and removes isolated polarity outliers.
pub struct PolarityCorrector<C> {
    adapter: ClassifierAdapter<C>,
    filter: ConsistencyFilter,
    config: Config,
}

impl<C: SentenceClassifier> PolarityCorrector<C> {
    /// Create a corrector with default configuration
    pub fn new(classifier: C) -> Self {
        Self::with_config(classifier, Config::default())
    }

    /// Create a corrector with custom configuration
    pub fn with_config(classifier: C, config: Config) -> Self {
        Self {
            adapter: ClassifierAdapter::new(classifier),
            filter: ConsistencyFilter::new(),
            config,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the wrapped classifier
    pub fn classifier(&self) -> &C {
        self.adapter.classifier()
    }

    /// Correct a document and report the decision for every sentence
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = std::time::Instant::now();

        let text = input.read_text()?;
        let sentences = split_sentences_with(&text, self.config.separator())?;
        let classified = self.adapter.classify_all(sentences)?;
        let outcome = self.filter.apply(&classified);

        let sentences: Vec<SentenceDTO> = classified
            .into_iter()
            .enumerate()
            .map(|(index, sentence)| SentenceDTO {
                index,
                polarity: sentence.polarity(),
                kept: outcome.is_kept(index),
                text: sentence.into_sentence(),
            })
            .collect();

        let elapsed = start.elapsed();
        let metadata = Metadata {
            total_sentences: sentences.len(),
            kept_sentences: outcome.sentences().len(),
            removed_sentences: outcome.removed_indices().len(),
            fallback_applied: outcome.fallback_applied(),
            processing_time_ms: elapsed.as_millis() as u64,
        };

        log::debug!(
            "corrected document: {} of {} sentences kept",
            metadata.kept_sentences,
            metadata.total_sentences
        );

        Ok(Output {
            sentences,
            metadata,
        })
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Correct a sentence sequence that was split elsewhere
    pub fn correct_sentences<I, S>(&self, sentences: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classified = self.adapter.classify_all(sentences)?;
        Ok(self.filter.filter(&classified))
    }

    /// Correct a document and return the consistent text.
    ///
    /// Every kept sentence is terminated by the configured separator.
    pub fn correct_text(&self, text: &str) -> Result<String> {
        let sentences = split_sentences_with(text, self.config.separator())?;
        let consistent = self.correct_sentences(sentences)?;
        Ok(join_sentences_with(&consistent, self.config.separator()))
    }
}

// Convenience functions

/// Correct a document with default configuration
pub fn correct_text<C: SentenceClassifier>(text: &str, classifier: C) -> Result<String> {
    PolarityCorrector::new(classifier).correct_text(text)
}

/// Correct a file with default configuration
pub fn process_file<C, P>(path: P, classifier: C) -> Result<Output>
where
    C: SentenceClassifier,
    P: AsRef<std::path::Path>,
{
    PolarityCorrector::new(classifier).process(Input::from_file(path.as_ref().to_path_buf()))
}
