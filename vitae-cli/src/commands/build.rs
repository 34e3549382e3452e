//! `vitae build` — render the CV and compile it to PDF.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Args;
use colored::Colorize;

use vitae_build::{pipeline, BuildOptions, WriteResult};

/// Arguments for `vitae build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project directory containing `data/` (defaults to the current directory).
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Include only items overlapping the last N years (omit for the full CV).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub years: Option<u32>,

    /// Output PDF filename (default: cv.pdf, or cv-<N>year.pdf with --years).
    #[arg(long)]
    pub output: Option<String>,

    /// Write the generated markup only; skip PDF compilation.
    #[arg(long)]
    pub data_only: bool,

    /// Show what would be written without writing or compiling.
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildArgs {
    pub fn run(self) -> Result<()> {
        let options = BuildOptions {
            years: self.years,
            output: self.output.clone(),
            data_only: self.data_only,
            dry_run: self.dry_run,
            current_year: chrono::Local::now().year(),
        };

        let outcome = pipeline::run(&self.dir, &options)
            .with_context(|| format!("build failed in '{}'", self.dir.display()))?;

        let prefix = if self.dry_run { "[dry-run] " } else { "" };
        match &outcome.markup {
            WriteResult::Written { path } => {
                println!("{prefix}{} wrote {}", "✎".green(), path.display())
            }
            WriteResult::WouldWrite { path } => {
                println!("{prefix}~ would write {}", path.display())
            }
            WriteResult::Unchanged { path } => {
                println!("{prefix}· unchanged {}", path.display())
            }
        }
        match (&outcome.pdf, outcome.compiled) {
            (Some(pdf), true) => println!("{} compiled {}", "✓".green(), pdf.display()),
            (Some(pdf), false) => println!("{} up to date {}", "✓".green(), pdf.display()),
            (None, _) => {}
        }
        Ok(())
    }
}
