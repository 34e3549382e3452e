//! # vitae-build
//!
//! Hash-gated markup writer and build orchestration.
//!
//! Call [`pipeline::run`] to load a project's data, render the document,
//! write the generated Typst markup, and compile it to PDF via the
//! external `typst` binary.

pub mod compile;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::BuildError;
pub use pipeline::{run, BuildOptions, BuildOutcome};
pub use writer::WriteResult;
