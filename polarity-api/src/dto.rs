//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use polarity_core::{join_sentences, Polarity};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Document source for correction
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the document text
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

/// One input sentence with its classification and filter decision
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceDTO {
    /// Position in the original document
    pub index: usize,
    /// Sentence text
    pub text: String,
    /// Polarity assigned by the classifier
    pub polarity: Polarity,
    /// Whether the sentence is part of the consistent sequence
    pub kept: bool,
}

/// Correction statistics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Number of sentences in the input document
    pub total_sentences: usize,
    /// Number of sentences in the consistent sequence
    pub kept_sentences: usize,
    /// Number of sentences marked as outliers
    pub removed_sentences: usize,
    /// Whether the unfiltered document was returned because nothing survived
    pub fallback_applied: bool,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete correction output
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Every input sentence in original order
    pub sentences: Vec<SentenceDTO>,
    /// Correction metadata
    pub metadata: Metadata,
}

impl Output {
    /// Sentences of the consistent sequence, in original order
    pub fn consistent_sentences(&self) -> Vec<&str> {
        self.sentences
            .iter()
            .filter(|s| s.kept)
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Sentences marked as outliers
    pub fn removed_sentences(&self) -> impl Iterator<Item = &SentenceDTO> {
        self.sentences.iter().filter(|s| !s.kept)
    }

    /// Consistent sentences joined into text, one per line
    pub fn to_text(&self) -> String {
        join_sentences(&self.consistent_sentences())
    }
}
