//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use polarity_api::dto::SentenceDTO;
use std::io::Write;

/// Plain text formatter - outputs one sentence per line
///
/// The output is byte-for-byte the newline join of the consistent sentences.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, sentence: &SentenceDTO) -> Result<()> {
        writeln!(self.writer, "{}", sentence.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polarity_api::Polarity;

    fn sentence(index: usize, text: &str) -> SentenceDTO {
        SentenceDTO {
            index,
            text: text.to_string(),
            polarity: Polarity::Positive,
            kept: true,
        }
    }

    #[test]
    fn test_one_sentence_per_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_sentence(&sentence(0, "Great fit.")).unwrap();
        formatter.format_sentence(&sentence(2, "  Soft fabric.")).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "Great fit.\n  Soft fabric.\n");
    }
}
