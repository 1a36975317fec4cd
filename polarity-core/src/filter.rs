//! Consistency filter
//!
//! Removes isolated polarity outliers from a classified sentence sequence.
//!
//! A single forward pass carries a running class seeded from the first
//! sentence. A sentence that disagrees with the running class is kept only if
//! it agrees with its immediate successor, i.e. it opens a new run of at least
//! two sentences. Otherwise it is marked for removal. The last sentence has no
//! successor, so a disagreeing last sentence is always marked. The running
//! class follows every sentence, marked or not.
//!
//! If nothing survives, the original sequence is returned unfiltered.

use crate::polarity::{ClassifiedSentence, Polarity};

/// Result of running the consistency filter over one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    sentences: Vec<String>,
    kept_indices: Vec<usize>,
    removed_indices: Vec<usize>,
    fallback_applied: bool,
}

impl FilterOutcome {
    /// Consistent sentences in original order
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Original positions of the returned sentences
    pub fn kept_indices(&self) -> &[usize] {
        &self.kept_indices
    }

    /// Original positions marked as outliers
    pub fn removed_indices(&self) -> &[usize] {
        &self.removed_indices
    }

    /// Whether the unfiltered input was returned because filtering left nothing
    pub fn fallback_applied(&self) -> bool {
        self.fallback_applied
    }

    /// Check if the sentence at `index` is part of the returned sequence
    pub fn is_kept(&self, index: usize) -> bool {
        self.kept_indices.binary_search(&index).is_ok()
    }

    /// Consume the outcome and return the consistent sentences
    pub fn into_sentences(self) -> Vec<String> {
        self.sentences
    }
}

/// Single-pass consistency filter
///
/// The filter holds no state; every call owns its own scan state, so one
/// instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistencyFilter;

impl ConsistencyFilter {
    /// Create a filter
    pub fn new() -> Self {
        Self
    }

    /// Compute the removal mark of every position.
    ///
    /// Position 0 is never marked.
    pub fn removal_marks(&self, polarities: &[Polarity]) -> Vec<bool> {
        let Some((&first, rest)) = polarities.split_first() else {
            return Vec::new();
        };

        let mut marks = Vec::with_capacity(polarities.len());
        marks.push(false);

        let (_, marks) = rest.iter().enumerate().fold(
            (first, marks),
            |(running_class, mut marks), (offset, &current)| {
                let index = offset + 1;
                let outlier = current != running_class
                    && match polarities.get(index + 1) {
                        Some(&next) => current != next,
                        None => true,
                    };

                if outlier {
                    log::trace!(
                        "sentence {index} is an outlier ({current} after {running_class} run)"
                    );
                }
                marks.push(outlier);
                (current, marks)
            },
        );

        marks
    }

    /// Filter a classified document.
    pub fn apply(&self, classified: &[ClassifiedSentence]) -> FilterOutcome {
        let polarities: Vec<Polarity> = classified
            .iter()
            .map(ClassifiedSentence::polarity)
            .collect();
        let marks = self.removal_marks(&polarities);

        let (kept_indices, removed_indices): (Vec<usize>, Vec<usize>) =
            (0..classified.len()).partition(|&index| !marks[index]);

        if kept_indices.is_empty() && !classified.is_empty() {
            log::debug!(
                "all {} sentences marked as outliers, returning input unfiltered",
                classified.len()
            );
            return FilterOutcome {
                sentences: classified.iter().map(|c| c.sentence().to_owned()).collect(),
                kept_indices: (0..classified.len()).collect(),
                removed_indices,
                fallback_applied: true,
            };
        }

        if !removed_indices.is_empty() {
            log::debug!(
                "removed {} of {} sentences as polarity outliers",
                removed_indices.len(),
                classified.len()
            );
        }

        FilterOutcome {
            sentences: kept_indices
                .iter()
                .map(|&index| classified[index].sentence().to_owned())
                .collect(),
            kept_indices,
            removed_indices,
            fallback_applied: false,
        }
    }

    /// Filter a classified document and return only the consistent sentences
    pub fn filter(&self, classified: &[ClassifiedSentence]) -> Vec<String> {
        self.apply(classified).into_sentences()
    }
}
