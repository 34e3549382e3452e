//! Error types for vitae-build.

use std::path::PathBuf;

use thiserror::Error;

use vitae_core::error::DataError;
use vitae_renderer::RenderError;

/// All errors that can arise from a build run.
#[derive(Debug, Error)]
pub enum BuildError {
    /// An error loading or validating the data files.
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `typst` binary on PATH.
    #[error("typst binary not found on PATH; install typst to compile PDFs")]
    TypstNotFound,

    /// The external compiler ran and failed.
    #[error("typst compilation failed ({status}): {stderr}")]
    Typst { status: String, stderr: String },
}

/// Convenience constructor for [`BuildError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> BuildError {
    BuildError::Io {
        path: path.into(),
        source,
    }
}
