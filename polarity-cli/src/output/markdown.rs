//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use polarity_api::dto::{Metadata, SentenceDTO};
use std::io::Write;

/// Markdown formatter - outputs each document as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, source: &str) -> Result<()> {
        self.sentence_count = 0;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &SentenceDTO) -> Result<()> {
        self.sentence_count += 1;
        writeln!(self.writer, "{}. {}", self.sentence_count, sentence.text.trim())?;
        Ok(())
    }

    fn end_document(&mut self, metadata: &Metadata) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Kept sentences: {}, removed: {}*",
            metadata.kept_sentences, metadata.removed_sentences
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
