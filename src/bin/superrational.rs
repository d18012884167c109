//! Superrational CLI - Log analysis for superrationality game evaluations
//!
//! This CLI provides a unified interface for:
//! - Analyzing completed evaluation logs into a per-condition CSV summary
//! - Validating the condition catalog used for prompt-text matching

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "superrational")]
#[command(version, about = "Log analysis for superrationality game evaluations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze evaluation logs and write a CSV summary
    Analyze(superrational::cli::commands::analyze::AnalyzeArgs),

    /// Validate condition catalog invariants
    Validate(superrational::cli::commands::validate::ValidateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => superrational::cli::commands::analyze::execute(args),
        Commands::Validate(args) => superrational::cli::commands::validate::execute(args),
    }
}
