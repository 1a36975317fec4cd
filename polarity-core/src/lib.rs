//! Sentence-level sentiment polarity correction
//!
//! Sentence classifiers make isolated mistakes: a single sentence inside a
//! run of positive sentences comes back negative, or the other way around.
//! This crate removes those single-sentence outliers so the remaining
//! sentences carry locally consistent polarity.
//!
//! # Architecture
//!
//! - [`ClassifierAdapter`] runs an injected [`SentenceClassifier`] once per
//!   sentence and maps its labels to [`Polarity`] values
//! - [`ConsistencyFilter`] removes isolated outliers in one forward pass and
//!   falls back to the unfiltered input if nothing would survive
//! - [`split_sentences`] and [`join_sentences`] convert between line-oriented
//!   documents and sentence sequences
//!
//! # Example
//!
//! ```rust
//! use polarity_core::{ClassifierAdapter, ConsistencyFilter, LabelClassifier};
//!
//! let classifier = LabelClassifier::new(|sentence: &str| {
//!     if sentence.contains("love") { "positive" } else { "negative" }
//! });
//! let adapter = ClassifierAdapter::new(classifier);
//!
//! let classified = adapter
//!     .classify_all(["I love it.", "It broke.", "I love the colour.", "I love the fit."])
//!     .unwrap();
//! let consistent = ConsistencyFilter::new().filter(&classified);
//!
//! assert_eq!(
//!     consistent,
//!     vec!["I love it.", "I love the colour.", "I love the fit."]
//! );
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod classifier;
pub mod error;
pub mod filter;
pub mod polarity;
pub mod text;

pub use adapter::ClassifierAdapter;
pub use classifier::{FnClassifier, LabelClassifier, SentenceClassifier};
pub use error::{ClassifierError, CoreError, Result};
pub use filter::{ConsistencyFilter, FilterOutcome};
pub use polarity::{ClassifiedSentence, Polarity, NEGATIVE_LABEL, POSITIVE_LABEL};
pub use text::{
    join_sentences, join_sentences_with, split_sentences, split_sentences_with, DEFAULT_MARKER,
};

/// Classify and filter a sentence sequence in one call
pub fn correct_sentences<C, I, S>(classifier: C, sentences: I) -> Result<FilterOutcome>
where
    C: SentenceClassifier,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let classified = ClassifierAdapter::new(classifier).classify_all(sentences)?;
    Ok(ConsistencyFilter::new().apply(&classified))
}
