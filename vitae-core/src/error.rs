//! Error types for vitae-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading and validating CV data.
///
/// Validation errors carry the collection name and zero-based record index
/// so a bad row can be located in the source file.
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A record lacks a field the renderer needs.
    #[error("{collection}[{index}]: missing required field '{field}'")]
    MissingField {
        collection: &'static str,
        index: usize,
        field: &'static str,
    },

    /// A year-like field is non-empty but not parseable as a year.
    /// Distinct from an absent field, which is intentionally permissive.
    #[error("{collection}[{index}]: field '{field}' must be a 4-digit year, got '{value}'")]
    MalformedYear {
        collection: &'static str,
        index: usize,
        field: &'static str,
        value: String,
    },

    /// An amount field is non-empty but not parseable as an unsigned integer.
    #[error("{collection}[{index}]: field '{field}' must be a numeric amount, got '{value}'")]
    MalformedAmount {
        collection: &'static str,
        index: usize,
        field: &'static str,
        value: String,
    },
}
