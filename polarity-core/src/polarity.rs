//! Binary sentiment polarity and classified sentences

use std::fmt;

/// Label a classifier must return for a sentence to count as positive
pub const POSITIVE_LABEL: &str = "positive";

/// Canonical label for negative sentences
pub const NEGATIVE_LABEL: &str = "negative";

/// Sentiment polarity of a single sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Polarity {
    /// Positive sentiment
    Positive,
    /// Negative sentiment
    Negative,
}

impl Polarity {
    /// Map a classifier label to a polarity.
    ///
    /// Only the exact label `"positive"` maps to [`Polarity::Positive`].
    /// Every other value, including differently cased variants, empty
    /// strings and third labels such as `"neutral"`, maps to
    /// [`Polarity::Negative`].
    pub fn from_label(label: &str) -> Self {
        if label == POSITIVE_LABEL {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    /// Canonical label for this polarity
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => POSITIVE_LABEL,
            Polarity::Negative => NEGATIVE_LABEL,
        }
    }

    /// Check if this polarity is positive
    pub fn is_positive(&self) -> bool {
        matches!(self, Polarity::Positive)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A sentence paired with the polarity its classifier assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedSentence {
    sentence: String,
    polarity: Polarity,
}

impl ClassifiedSentence {
    /// Create a classified sentence
    pub fn new(sentence: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            sentence: sentence.into(),
            polarity,
        }
    }

    /// Sentence text
    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// Assigned polarity
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Consume the pair and return the sentence text
    pub fn into_sentence(self) -> String {
        self.sentence
    }
}
