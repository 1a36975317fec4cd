//! Generate lexicon command implementation

use crate::classifier::lexicon::{LexiconConfig, LexiconMetadata, WordLists};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-lexicon command
#[derive(Debug, Args)]
pub struct GenerateLexiconArgs {
    /// Name recorded in the lexicon metadata
    #[arg(short, long, value_name = "NAME", default_value = "Custom")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateLexiconArgs {
    /// Execute the generate-lexicon command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating lexicon template...");
        println!("  Name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the word lists for your domain");
        println!("2. Validate your lexicon:");
        println!("   polarity validate --lexicon {}", self.output.display());
        println!("3. Use it for correction:");
        println!(
            "   polarity correct -i input.txt --lexicon {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template lexicon content
    fn generate_template(&self) -> Result<String> {
        let config = LexiconConfig {
            metadata: LexiconMetadata {
                name: self.name.clone(),
                description: Some(
                    "Describe the kind of text this lexicon is tuned for".to_string(),
                ),
            },
            words: WordLists {
                positive: words(&["good", "great", "love", "excellent", "happy"]),
                negative: words(&["bad", "awful", "hate", "poor", "broken"]),
                negators: words(&["not", "never", "no"]),
            },
        };

        let body = toml::to_string(&config).context("Failed to serialize lexicon template")?;
        Ok(format!("{TEMPLATE_HEADER}\n{body}"))
    }
}

const TEMPLATE_HEADER: &str = "\
# Sentiment lexicon
#
# positive: words that make a sentence positive
# negative: words that make a sentence negative (never also positive)
# negators: words that flip the polarity of the next lexicon word (\"not good\")
";

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}
