//! Precomputed label classifier
//!
//! Reads one label per line, aligned with the document's sentences. Useful
//! when sentences were classified by an external tool ahead of time.

use anyhow::{Context, Result};
use polarity_api::{ClassifierError, SentenceClassifier};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Classifier replaying labels in sentence order
///
/// Each `classify` call consumes the next label. Running out of labels is a
/// classification failure. The labels belong to exactly one document: call
/// [`LabelFileClassifier::reset`] before classifying the same document again.
#[derive(Debug)]
pub struct LabelFileClassifier {
    labels: Vec<String>,
    cursor: AtomicUsize,
}

impl LabelFileClassifier {
    /// Create a classifier from labels in sentence order
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Parse label text, one label per line
    pub fn parse(text: &str) -> Self {
        Self::new(
            polarity_api::split_sentences(text)
                .into_iter()
                .map(|label| label.trim().to_string())
                .collect(),
        )
    }

    /// Load labels from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read label file: {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if there are no labels
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of labels consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }

    /// Rewind to the first label
    pub fn reset(&self) {
        self.cursor.store(0, Ordering::Relaxed);
    }
}

impl SentenceClassifier for LabelFileClassifier {
    fn classify(&self, _sentence: &str) -> Result<String, ClassifierError> {
        let position = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.labels.get(position).cloned().ok_or_else(|| {
            format!(
                "label file has {} labels, no label for sentence {}",
                self.labels.len(),
                position + 1
            )
            .into()
        })
    }
}
