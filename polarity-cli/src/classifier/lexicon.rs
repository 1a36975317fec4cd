//! Word-list sentence classifier
//!
//! A lexicon is a TOML file with positive, negative and negator words.
//! Sentences are scored by counting lexicon hits; a negator flips the next
//! lexicon word it precedes.

use polarity_api::{ClassifierError, SentenceClassifier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const EMBEDDED_ENGLISH: &str = include_str!("../../lexicons/english.toml");

/// Label for sentences with no net sentiment
pub const NEUTRAL_LABEL: &str = "neutral";

/// Lexicon file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: LexiconMetadata,
    pub words: WordLists,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordLists {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    #[serde(default)]
    pub negators: Vec<String>,
}

/// Errors raised while loading a lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid lexicon: {0}")]
    Invalid(String),
}

/// Rule-based classifier backed by a word lexicon
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    name: String,
    positive: HashSet<String>,
    negative: HashSet<String>,
    negators: HashSet<String>,
}

impl LexiconClassifier {
    /// Built-in English lexicon
    pub fn english() -> Result<Self, LexiconError> {
        Self::from_toml_str(EMBEDDED_ENGLISH)
    }

    /// Load a lexicon from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse a lexicon from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, LexiconError> {
        let config: LexiconConfig = toml::from_str(content)?;
        Self::from_config(config)
    }

    /// Build a classifier from a parsed lexicon, validating it
    pub fn from_config(config: LexiconConfig) -> Result<Self, LexiconError> {
        if config.metadata.name.trim().is_empty() {
            return Err(LexiconError::Invalid("name must not be empty".to_string()));
        }

        let positive = normalize(&config.words.positive);
        let negative = normalize(&config.words.negative);
        let negators = normalize(&config.words.negators);

        if positive.is_empty() {
            return Err(LexiconError::Invalid(
                "at least one positive word is required".to_string(),
            ));
        }
        if negative.is_empty() {
            return Err(LexiconError::Invalid(
                "at least one negative word is required".to_string(),
            ));
        }

        let mut overlap: Vec<&String> = positive.intersection(&negative).collect();
        if !overlap.is_empty() {
            overlap.sort();
            return Err(LexiconError::Invalid(format!(
                "words listed as both positive and negative: {}",
                overlap
                    .iter()
                    .map(|w| w.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        Ok(Self {
            name: config.metadata.name,
            positive,
            negative,
            negators,
        })
    }

    /// Lexicon name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of positive, negative and negator words
    pub fn word_counts(&self) -> (usize, usize, usize) {
        (self.positive.len(), self.negative.len(), self.negators.len())
    }

    /// Net sentiment score of a sentence
    pub fn score(&self, sentence: &str) -> i32 {
        let mut score = 0;
        let mut negate = false;

        for word in tokenize(sentence) {
            let hit = if self.positive.contains(&word) {
                1
            } else if self.negative.contains(&word) {
                -1
            } else {
                if self.negators.contains(&word) {
                    negate = !negate;
                }
                continue;
            };

            score += if negate { -hit } else { hit };
            negate = false;
        }

        score
    }

    /// Label for a sentence: `positive`, `negative` or `neutral`
    pub fn label(&self, sentence: &str) -> &'static str {
        match self.score(sentence) {
            s if s > 0 => polarity_api::Polarity::Positive.as_str(),
            s if s < 0 => polarity_api::Polarity::Negative.as_str(),
            _ => NEUTRAL_LABEL,
        }
    }
}

impl SentenceClassifier for LexiconClassifier {
    fn classify(&self, sentence: &str) -> Result<String, ClassifierError> {
        Ok(self.label(sentence).to_string())
    }
}

fn normalize(words: &[String]) -> HashSet<String> {
    words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

fn tokenize(sentence: &str) -> impl Iterator<Item = String> + '_ {
    sentence
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}
