//! Command-line entry point for polarity correction

use anyhow::Result;
use clap::Parser;
use polarity_cli::commands::Commands;

/// Remove sentences whose sentiment polarity contradicts their neighbours
#[derive(Debug, Parser)]
#[command(name = "polarity", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
