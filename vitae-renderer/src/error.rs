//! Error types for vitae-renderer.

use thiserror::Error;

/// All errors that can arise from document rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (also covers context serialization).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
