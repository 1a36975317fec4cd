//! Sentence classifiers available from the command line

pub mod labels;
pub mod lexicon;

pub use labels::LabelFileClassifier;
pub use lexicon::{LexiconClassifier, LexiconError};

use polarity_api::{ClassifierError, SentenceClassifier};
use std::sync::Arc;

/// Classifier used for one document
#[derive(Debug)]
pub enum DocumentClassifier {
    /// Shared word lexicon
    Lexicon(Arc<LexiconClassifier>),
    /// Precomputed labels for a single document
    Labels(LabelFileClassifier),
}

impl DocumentClassifier {
    /// Short description for log output
    pub fn describe(&self) -> String {
        match self {
            DocumentClassifier::Lexicon(lexicon) => format!("lexicon '{}'", lexicon.name()),
            DocumentClassifier::Labels(labels) => format!("label file ({} labels)", labels.len()),
        }
    }
}

impl SentenceClassifier for DocumentClassifier {
    fn classify(&self, sentence: &str) -> Result<String, ClassifierError> {
        match self {
            DocumentClassifier::Lexicon(lexicon) => lexicon.classify(sentence),
            DocumentClassifier::Labels(labels) => labels.classify(sentence),
        }
    }
}

/// Names and descriptions of the available classifiers
pub fn available_classifiers() -> [(&'static str, &'static str); 3] {
    [
        ("english", "Built-in English word lexicon (default)"),
        ("lexicon", "Custom word lexicon loaded with --lexicon FILE"),
        ("labels", "Precomputed labels, one per sentence, with --labels FILE"),
    ]
}
