//! Validate command implementation

use crate::classifier::LexiconClassifier;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to lexicon file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        match LexiconClassifier::from_file(&self.lexicon) {
            Ok(lexicon) => {
                let (positive, negative, negators) = lexicon.word_counts();
                println!("✓ Lexicon is valid!");
                println!("  Name: {}", lexicon.name());
                println!("  Positive words: {positive}");
                println!("  Negative words: {negative}");
                println!("  Negators: {negators}");
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
