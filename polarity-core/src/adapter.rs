//! Classifier adapter
//!
//! Runs a [`SentenceClassifier`] over an ordered sentence sequence and maps
//! each returned label onto a [`Polarity`].

use crate::{
    classifier::SentenceClassifier,
    error::{CoreError, Result},
    polarity::{ClassifiedSentence, Polarity},
};

/// Produces classified sentences from a classification capability
///
/// The adapter issues exactly one classification call per sentence, strictly
/// in input order. It never retries and never caches.
#[derive(Debug, Clone)]
pub struct ClassifierAdapter<C> {
    classifier: C,
}

impl<C: SentenceClassifier> ClassifierAdapter<C> {
    /// Create an adapter around a classifier
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Get the wrapped classifier
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Consume the adapter and return the wrapped classifier
    pub fn into_inner(self) -> C {
        self.classifier
    }

    /// Classify a single sentence located at `index` in its document
    pub fn classify_one(&self, index: usize, sentence: &str) -> Result<Polarity> {
        let label = self
            .classifier
            .classify(sentence)
            .map_err(|source| CoreError::ClassificationFailure { index, source })?;

        let polarity = Polarity::from_label(&label);
        log::trace!("sentence {index}: label {label:?} -> {polarity}");
        Ok(polarity)
    }

    /// Classify every sentence in order.
    ///
    /// Stops at the first classifier failure; sentences after the failing one
    /// are not classified.
    pub fn classify_all<I, S>(&self, sentences: I) -> Result<Vec<ClassifiedSentence>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        sentences
            .into_iter()
            .enumerate()
            .map(|(index, sentence)| {
                let sentence = sentence.into();
                let polarity = self.classify_one(index, &sentence)?;
                Ok(ClassifiedSentence::new(sentence, polarity))
            })
            .collect()
    }
}
