//! Sentence classification capability
//!
//! The corrector never looks inside a classifier. Anything that can turn a
//! sentence into a label can be plugged in: a model client, a rule-based
//! tagger, or a table of precomputed labels.

use crate::error::ClassifierError;
use std::sync::Arc;

/// A capability that assigns a sentiment label to a sentence
pub trait SentenceClassifier {
    /// Classify a sentence and return its label.
    ///
    /// Returning an error aborts classification of the whole document.
    fn classify(&self, sentence: &str) -> Result<String, ClassifierError>;
}

impl<C: SentenceClassifier + ?Sized> SentenceClassifier for &C {
    fn classify(&self, sentence: &str) -> Result<String, ClassifierError> {
        (**self).classify(sentence)
    }
}

impl<C: SentenceClassifier + ?Sized> SentenceClassifier for Box<C> {
    fn classify(&self, sentence: &str) -> Result<String, ClassifierError> {
        (**self).classify(sentence)
    }
}

impl<C: SentenceClassifier + ?Sized> SentenceClassifier for Arc<C> {
    fn classify(&self, sentence: &str) -> Result<String, ClassifierError> {
        (**self).classify(sentence)
    }
}

/// Adapter turning a fallible closure into a classifier
pub struct FnClassifier<F> {
    f: F,
}

impl<F, E> FnClassifier<F>
where
    F: Fn(&str) -> Result<String, E>,
    E: Into<ClassifierError>,
{
    /// Wrap a fallible classification function
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, E> SentenceClassifier for FnClassifier<F>
where
    F: Fn(&str) -> Result<String, E>,
    E: Into<ClassifierError>,
{
    fn classify(&self, sentence: &str) -> Result<String, ClassifierError> {
        (self.f)(sentence).map_err(Into::into)
    }
}

/// Adapter turning an infallible labelling function into a classifier
pub struct LabelClassifier<F> {
    f: F,
}

impl<F, L> LabelClassifier<F>
where
    F: Fn(&str) -> L,
    L: Into<String>,
{
    /// Wrap an infallible labelling function
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, L> SentenceClassifier for LabelClassifier<F>
where
    F: Fn(&str) -> L,
    L: Into<String>,
{
    fn classify(&self, sentence: &str) -> Result<String, ClassifierError> {
        Ok((self.f)(sentence).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_classifier() {
        let classifier = LabelClassifier::new(|s: &str| {
            if s.contains("good") {
                "positive"
            } else {
                "negative"
            }
        });
        assert_eq!(classifier.classify("a good day").unwrap(), "positive");
        assert_eq!(classifier.classify("a day").unwrap(), "negative");
    }

    #[test]
    fn test_fn_classifier_propagates_errors() {
        let classifier = FnClassifier::new(|s: &str| {
            if s.is_empty() {
                Err("empty sentence")
            } else {
                Ok("positive".to_string())
            }
        });
        assert_eq!(classifier.classify("fine").unwrap(), "positive");

        let err = classifier.classify("").unwrap_err();
        assert_eq!(err.to_string(), "empty sentence");
    }

    #[test]
    fn test_pointer_impls_delegate() {
        let classifier = LabelClassifier::new(|_: &str| "positive");

        let by_ref: &dyn SentenceClassifier = &classifier;
        assert_eq!(by_ref.classify("x").unwrap(), "positive");

        let boxed: Box<dyn SentenceClassifier> =
            Box::new(LabelClassifier::new(|_: &str| "neutral"));
        assert_eq!(boxed.classify("x").unwrap(), "neutral");

        let shared = Arc::new(classifier);
        assert_eq!(shared.classify("x").unwrap(), "positive");
    }
}
