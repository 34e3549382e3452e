//! vitae — CV build CLI.
//!
//! # Usage
//!
//! ```text
//! vitae build [DIR] [--years N] [--output NAME] [--data-only] [--dry-run]
//! vitae check [DIR] [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{build::BuildArgs, check::CheckArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "vitae",
    version,
    about = "Build a CV document from structured career data",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the CV and compile it to PDF.
    Build(BuildArgs),

    /// Validate the data files and summarize record counts.
    Check(CheckArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Build(args) => args.run(),
        Commands::Check(args) => args.run(),
    }
}
