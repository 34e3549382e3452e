//! Build pipeline — load, render, write markup, compile.
//!
//! # Project layout
//!
//! ```text
//! <project_dir>/
//!   data/
//!     personal.yaml
//!     records.yaml
//!   generated/
//!     cv.typ            (written by the pipeline)
//!   output/
//!     cv.pdf            (written by the external typesetter)
//! ```

use std::path::{Path, PathBuf};

use vitae_core::store;
use vitae_renderer::{DocumentContext, Renderer, YearWindow};

use crate::compile;
use crate::error::{io_err, BuildError};
use crate::writer::{self, WriteResult};

/// Options for one build run.
///
/// `current_year` is injected by the caller so the pipeline itself never
/// reads the clock.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Include only items overlapping the last N years; `None` = full CV.
    pub years: Option<u32>,
    /// Output PDF filename override.
    pub output: Option<String>,
    /// Stop after writing the generated markup.
    pub data_only: bool,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
    /// The calendar year the window is computed against.
    pub current_year: i32,
}

/// Outcome of a build run.
#[derive(Debug)]
pub struct BuildOutcome {
    pub markup: WriteResult,
    /// The PDF path, when the run got as far as the compile step.
    pub pdf: Option<PathBuf>,
    /// False when compilation was skipped (markup unchanged, data-only, dry-run).
    pub compiled: bool,
}

/// `<project_dir>/data/` — pure, no I/O.
pub fn data_dir(project_dir: &Path) -> PathBuf {
    project_dir.join("data")
}

/// `<project_dir>/generated/cv.typ` — pure, no I/O.
pub fn markup_path(project_dir: &Path) -> PathBuf {
    project_dir.join("generated").join("cv.typ")
}

/// `<project_dir>/output/<name>.pdf` — pure, no I/O.
///
/// Default name is `cv.pdf`, or `cv-<N>year.pdf` when a window is set.
pub fn output_path(project_dir: &Path, options: &BuildOptions) -> PathBuf {
    let name = match (&options.output, options.years) {
        (Some(name), _) => name.clone(),
        (None, Some(years)) => format!("cv-{years}year.pdf"),
        (None, None) => "cv.pdf".to_owned(),
    };
    project_dir.join("output").join(name)
}

/// Run the full pipeline for one project directory.
pub fn run(project_dir: &Path, options: &BuildOptions) -> Result<BuildOutcome, BuildError> {
    let (personal, data) = store::load_dir(&data_dir(project_dir))?;
    let window = YearWindow::from_years(options.current_year, options.years);
    let ctx = DocumentContext::build(&personal, &data, &window);
    let markup = Renderer::new()?.render(&ctx)?;

    let markup_file = markup_path(project_dir);
    let write = writer::write_if_changed(&markup_file, &markup, options.dry_run)?;

    if options.data_only || options.dry_run {
        return Ok(BuildOutcome {
            markup: write,
            pdf: None,
            compiled: false,
        });
    }

    let pdf = output_path(project_dir, options);
    if matches!(write, WriteResult::Unchanged { .. }) && pdf.exists() {
        tracing::info!("markup unchanged; skipping compile: {}", pdf.display());
        return Ok(BuildOutcome {
            markup: write,
            pdf: Some(pdf),
            compiled: false,
        });
    }

    let typst = compile::find_typst().ok_or(BuildError::TypstNotFound)?;
    if let Some(parent) = pdf.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    compile::compile_pdf(&typst, &markup_file, &pdf, project_dir)?;
    tracing::info!("compiled: {}", pdf.display());

    Ok(BuildOutcome {
        markup: write,
        pdf: Some(pdf),
        compiled: true,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
