//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use polarity_api::dto::{Metadata, SentenceDTO};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one object per document
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
    current: Option<DocumentData>,
}

/// Data structure for one corrected document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Document source (file path)
    pub source: String,
    /// Consistent sentences
    pub sentences: Vec<SentenceData>,
    /// Number of sentences marked as outliers
    pub removed: usize,
    /// Whether the unfiltered document was kept because nothing survived
    pub fallback_applied: bool,
}

/// Data structure for one consistent sentence
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// Position in the original document
    pub index: usize,
    /// The sentence text
    pub text: String,
    /// Polarity assigned by the classifier
    pub polarity: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
            current: None,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, source: &str) -> Result<()> {
        self.current = Some(DocumentData {
            source: source.to_string(),
            sentences: Vec::new(),
            removed: 0,
            fallback_applied: false,
        });
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &SentenceDTO) -> Result<()> {
        let document = self.current.get_or_insert_with(|| DocumentData {
            source: String::new(),
            sentences: Vec::new(),
            removed: 0,
            fallback_applied: false,
        });
        document.sentences.push(SentenceData {
            index: sentence.index,
            text: sentence.text.clone(),
            polarity: sentence.polarity.to_string(),
        });
        Ok(())
    }

    fn end_document(&mut self, metadata: &Metadata) -> Result<()> {
        if let Some(mut document) = self.current.take() {
            document.removed = metadata.removed_sentences;
            document.fallback_applied = metadata.fallback_applied;
            self.documents.push(document);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polarity_api::Polarity;

    fn metadata(removed: usize) -> Metadata {
        Metadata {
            total_sentences: 1 + removed,
            kept_sentences: 1,
            removed_sentences: removed,
            fallback_applied: false,
            processing_time_ms: 0,
        }
    }

    #[test]
    fn test_documents_serialized_as_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.begin_document("review.txt").unwrap();
        formatter
            .format_sentence(&SentenceDTO {
                index: 0,
                text: "Works well.".to_string(),
                polarity: Polarity::Positive,
                kept: true,
            })
            .unwrap();
        formatter.end_document(&metadata(2)).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["source"], "review.txt");
        assert_eq!(value[0]["removed"], 2);
        assert_eq!(value[0]["sentences"][0]["text"], "Works well.");
        assert_eq!(value[0]["sentences"][0]["polarity"], "positive");
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.into_inner()).unwrap(), "[]\n");
    }
}
