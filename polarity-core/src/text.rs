//! Document segmentation and reassembly
//!
//! Documents are line oriented: one sentence per line. Splitting keeps empty
//! interior lines so every sentence keeps its position, but drops trailing
//! empty segments so a final newline does not produce a phantom sentence.

use crate::error::{CoreError, Result};

/// Default sentence boundary marker
pub const DEFAULT_MARKER: &str = "\n";

/// Split a document into sentences on newlines
pub fn split_sentences(text: &str) -> Vec<&str> {
    trim_trailing_empty(text.split('\n').collect())
}

/// Split a document into sentences on a custom boundary marker
pub fn split_sentences_with<'a>(text: &'a str, marker: &str) -> Result<Vec<&'a str>> {
    if marker.is_empty() {
        return Err(CoreError::EmptyMarker);
    }
    Ok(trim_trailing_empty(text.split(marker).collect()))
}

fn trim_trailing_empty(mut sentences: Vec<&str>) -> Vec<&str> {
    while sentences.last().is_some_and(|s| s.is_empty()) {
        sentences.pop();
    }
    sentences
}

/// Join sentences into a document, terminating each one with a newline
pub fn join_sentences<S: AsRef<str>>(sentences: &[S]) -> String {
    join_sentences_with(sentences, DEFAULT_MARKER)
}

/// Join sentences, terminating each one with `marker`
pub fn join_sentences_with<S: AsRef<str>>(sentences: &[S], marker: &str) -> String {
    let capacity = sentences
        .iter()
        .map(|s| s.as_ref().len() + marker.len())
        .sum();

    sentences
        .iter()
        .fold(String::with_capacity(capacity), |mut text, sentence| {
            text.push_str(sentence.as_ref());
            text.push_str(marker);
            text
        })
}
