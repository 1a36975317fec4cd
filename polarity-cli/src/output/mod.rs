//! Output formatting module

use anyhow::Result;
use polarity_api::dto::{Metadata, SentenceDTO};

/// Trait for output formatters
///
/// For every document the caller invokes `begin_document`, then
/// `format_sentence` for each sentence of the consistent sequence, then
/// `end_document`. `finish` is called once after the last document.
pub trait OutputFormatter: Send + Sync {
    /// Start a new document
    fn begin_document(&mut self, _source: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output a single consistent sentence
    fn format_sentence(&mut self, sentence: &SentenceDTO) -> Result<()>;

    /// Close the current document
    fn end_document(&mut self, _metadata: &Metadata) -> Result<()> {
        Ok(())
    }

    /// Finalize output (e.g., write the collected JSON)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
