//! `vitae check` — validate data files and summarize record counts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

use vitae_build::pipeline;
use vitae_core::store;

/// Arguments for `vitae check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Project directory containing `data/` (defaults to the current directory).
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Emit the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled, Serialize)]
struct CollectionRow {
    collection: String,
    records: usize,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let data_dir = pipeline::data_dir(&self.dir);
        let (personal, data) = store::load_dir(&data_dir)
            .with_context(|| format!("invalid data in '{}'", data_dir.display()))?;

        let rows: Vec<CollectionRow> = data
            .collection_counts()
            .into_iter()
            .map(|(name, count)| CollectionRow {
                collection: name.to_owned(),
                records: count,
            })
            .collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            println!("{}", Table::new(&rows));
            println!("{} data for {} is valid", "✓".green(), personal.name);
        }
        Ok(())
    }
}
