//! Correct command implementation

use crate::classifier::{DocumentClassifier, LabelFileClassifier, LexiconClassifier};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use polarity_api::{Input, Output, PolarityCorrector};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the correct command
#[derive(Debug, Args)]
pub struct CorrectArgs {
    /// Input files or patterns (supports glob), one sentence per line
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's default_format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Lexicon file for the word-list classifier (default: built-in English)
    #[arg(short, long, value_name = "FILE", conflicts_with = "labels")]
    pub lexicon: Option<PathBuf>,

    /// Precomputed labels, one per sentence (single input document only)
    #[arg(long, value_name = "FILE")]
    pub labels: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "POLARITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Correct documents concurrently
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one consistent sentence per line
    Text,
    /// JSON array of documents with their consistent sentences
    Json,
    /// Markdown numbered list per document
    Markdown,
}

impl OutputFormat {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Where per-document classifiers come from
#[derive(Debug)]
enum ClassifierSource {
    Lexicon(Arc<LexiconClassifier>),
    Labels(PathBuf),
}

impl ClassifierSource {
    fn document_classifier(&self) -> Result<DocumentClassifier> {
        Ok(match self {
            ClassifierSource::Lexicon(lexicon) => DocumentClassifier::Lexicon(Arc::clone(lexicon)),
            ClassifierSource::Labels(path) => {
                DocumentClassifier::Labels(LabelFileClassifier::from_file(path)?)
            }
        })
    }
}

/// A corrected input document
#[derive(Debug)]
pub struct CorrectedDocument {
    /// Document path as given on the command line
    pub source: String,
    /// Correction output
    pub output: Output,
}

impl CorrectArgs {
    /// Execute the correct command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting polarity correction");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let format = self.resolve_format(&config)?;
        let files = resolve_patterns(&self.input)?;
        let source = self.classifier_source(&config, files.len())?;

        let documents = self.correct_files(&files, &source, &config)?;

        let mut formatter = self.create_formatter(format, config.output.pretty_json)?;
        for document in &documents {
            write_document(formatter.as_mut(), document)?;
        }
        formatter.finish()?;

        let removed: usize = documents
            .iter()
            .map(|d| d.output.metadata.removed_sentences)
            .sum();
        log::info!(
            "Corrected {} document(s), removed {} outlier sentence(s)",
            documents.len(),
            removed
        );

        Ok(())
    }

    /// Correct every file, in file order
    fn correct_files(
        &self,
        files: &[PathBuf],
        source: &ClassifierSource,
        config: &CliConfig,
    ) -> Result<Vec<CorrectedDocument>> {
        if self.threads == Some(0) {
            return Err(CliError::ConfigError("--threads must be at least 1".to_string()).into());
        }

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let correct = |path: &PathBuf| -> Result<CorrectedDocument> {
            let document = correct_file(path, source)?;
            progress.file_completed(&document.source);
            Ok(document)
        };

        let documents = if self.parallel && files.len() > 1 {
            let threads = self
                .threads
                .or(Some(config.performance.worker_threads).filter(|&n| n > 0))
                .unwrap_or_else(num_cpus::get);
            log::debug!("Correcting {} documents on {threads} threads", files.len());

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| files.par_iter().map(correct).collect::<Result<Vec<_>>>())?
        } else {
            files.iter().map(correct).collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        Ok(documents)
    }

    fn classifier_source(&self, config: &CliConfig, file_count: usize) -> Result<ClassifierSource> {
        if let Some(labels) = &self.labels {
            if file_count != 1 {
                return Err(CliError::LabelsNeedSingleInput(file_count).into());
            }
            return Ok(ClassifierSource::Labels(labels.clone()));
        }

        let lexicon = match self.lexicon.as_ref().or(config.classifier.lexicon.as_ref()) {
            Some(path) => LexiconClassifier::from_file(path)
                .with_context(|| format!("Failed to load lexicon: {}", path.display()))?,
            None => LexiconClassifier::english().context("Failed to load built-in lexicon")?,
        };
        log::debug!("Using lexicon '{}'", lexicon.name());

        Ok(ClassifierSource::Lexicon(Arc::new(lexicon)))
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.default_format, true)
                .map_err(|_| CliError::UnknownFormat(config.output.default_format.clone()).into()),
        }
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

/// Read, classify and correct one document
fn correct_file(path: &Path, source: &ClassifierSource) -> Result<CorrectedDocument> {
    let text = FileReader::read_text(path)?;
    let classifier = source.document_classifier()?;
    log::debug!("Correcting {} with {}", path.display(), classifier.describe());

    let corrector = PolarityCorrector::new(classifier);
    let output = corrector
        .process(Input::from_text(text))
        .with_context(|| format!("Failed to correct {}", path.display()))?;

    if let DocumentClassifier::Labels(labels) = corrector.classifier() {
        if labels.len() > labels.consumed() {
            log::warn!(
                "{}: label file has {} labels, {} unused",
                path.display(),
                labels.len(),
                labels.len() - labels.consumed()
            );
        }
    }

    Ok(CorrectedDocument {
        source: path.display().to_string(),
        output,
    })
}

/// Send the consistent sentences of one document through a formatter
fn write_document(formatter: &mut dyn OutputFormatter, document: &CorrectedDocument) -> Result<()> {
    formatter.begin_document(&document.source)?;
    for sentence in document.output.sentences.iter().filter(|s| s.kept) {
        formatter.format_sentence(sentence)?;
    }
    formatter.end_document(&document.output.metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> CorrectArgs {
        CorrectArgs {
            input,
            output: None,
            format: None,
            lexicon: None,
            labels: None,
            config: None,
            parallel: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::Text.as_str(), "text");
        assert_eq!(OutputFormat::Json.as_str(), "json");
        assert_eq!(OutputFormat::Markdown.as_str(), "markdown");
    }

    #[test]
    fn test_resolve_format_from_config() {
        let mut config = CliConfig::default();
        config.output.default_format = "Markdown".to_string();
        let format = args(vec![]).resolve_format(&config).unwrap();
        assert_eq!(format, OutputFormat::Markdown);
    }

    #[test]
    fn test_resolve_format_unknown() {
        let mut config = CliConfig::default();
        config.output.default_format = "yaml".to_string();
        let err = args(vec![]).resolve_format(&config).unwrap_err();
        assert!(err.to_string().contains("Unknown output format: yaml"));
    }

    #[test]
    fn test_labels_rejected_for_multiple_documents() {
        let mut args = args(vec![]);
        args.labels = Some(PathBuf::from("labels.txt"));
        let err = args
            .classifier_source(&CliConfig::default(), 2)
            .unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let mut args = args(vec![]);
        args.threads = Some(0);
        let source = args.classifier_source(&CliConfig::default(), 2).unwrap();
        let files = vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")];
        let err = args
            .correct_files(&files, &source, &CliConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("--threads must be at least 1"));
    }

    #[test]
    fn test_correct_file_with_builtin_lexicon() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("review.txt");
        fs::write(
            &path,
            "The battery is great.\nThe charger is awful.\nThe screen is lovely.\nIt is fast.\n",
        )
        .unwrap();

        let source = args(vec![])
            .classifier_source(&CliConfig::default(), 1)
            .unwrap();
        let document = correct_file(&path, &source).unwrap();

        let kept: Vec<_> = document.output.consistent_sentences();
        assert_eq!(
            kept,
            vec!["The battery is great.", "The screen is lovely.", "It is fast."]
        );
        assert_eq!(document.output.metadata.removed_sentences, 1);
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("review.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "Good.\nBad.\nGood.\nNice.\n").unwrap();

        let mut args = args(vec![input.display().to_string()]);
        args.output = Some(output.clone());
        args.execute().unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "Good.\nGood.\nNice.\n");
    }

    #[test]
    fn test_parallel_preserves_file_order() {
        let temp_dir = TempDir::new().unwrap();
        for (name, text) in [("a.txt", "Great.\n"), ("b.txt", "Awful.\n"), ("c.txt", "Nice.\n")] {
            fs::write(temp_dir.path().join(name), text).unwrap();
        }
        let output = temp_dir.path().join("out.txt");

        let mut args = args(vec![temp_dir.path().join("*.txt").display().to_string()]);
        args.output = Some(output.clone());
        args.parallel = true;
        args.threads = Some(2);
        args.execute().unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "Great.\nAwful.\nNice.\n");
    }
}
