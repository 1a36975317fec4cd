//! CLI command implementations

use crate::classifier::available_classifiers;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};

pub mod correct;
pub mod generate_lexicon;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Remove sentences whose polarity disagrees with their neighbours
    Correct(correct::CorrectArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Generate a lexicon template
    GenerateLexicon(generate_lexicon::GenerateLexiconArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available sentence classifiers
    Classifiers,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Correct(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateLexicon(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in correct::OutputFormat::value_variants() {
                    println!("  {}", format.as_str());
                }
            }
            ListCommands::Classifiers => {
                println!("Available classifiers:");
                for (name, description) in available_classifiers() {
                    println!("  {name:<10} {description}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn correct_args() -> correct::CorrectArgs {
        correct::CorrectArgs {
            input: vec!["review.txt".to_string()],
            output: None,
            format: Some(correct::OutputFormat::Text),
            lexicon: None,
            labels: None,
            config: None,
            parallel: false,
            threads: None,
            quiet: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_commands_debug_format() {
        let correct_cmd = Commands::Correct(correct_args());

        let debug_str = format!("{:?}", correct_cmd);
        assert!(debug_str.contains("Correct"));
        assert!(debug_str.contains("review.txt"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Classifiers,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Classifiers"));
    }

    #[test]
    fn test_enum_variants_completeness() {
        let commands = [
            Commands::Correct(correct_args()),
            Commands::Validate(validate::ValidateArgs {
                lexicon: PathBuf::from("lexicon.toml"),
            }),
            Commands::GenerateLexicon(generate_lexicon::GenerateLexiconArgs {
                name: "Custom".to_string(),
                output: PathBuf::from("lexicon.toml"),
            }),
            Commands::List {
                subcommand: ListCommands::Formats,
            },
        ];

        let names: Vec<&str> = commands
            .iter()
            .map(|command| match command {
                Commands::Correct(_) => "correct",
                Commands::Validate(_) => "validate",
                Commands::GenerateLexicon(_) => "generate-lexicon",
                Commands::List { .. } => "list",
            })
            .collect();
        assert_eq!(names, ["correct", "validate", "generate-lexicon", "list"]);
    }

    #[test]
    fn test_list_commands_execute() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        assert!(list_cmd.execute().is_ok());

        let list_cmd = Commands::List {
            subcommand: ListCommands::Classifiers,
        };
        assert!(list_cmd.execute().is_ok());
    }
}
