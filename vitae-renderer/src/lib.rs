//! # vitae-renderer
//!
//! The data-to-prose rendering pipeline: year-window filtering, sentence
//! and markup formatting, per-collection section renderers, and the
//! document assembler, rendered to Typst markup through an embedded Tera
//! template.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vitae_core::types::{CvData, Personal};
//! use vitae_renderer::{DocumentContext, Renderer, YearWindow};
//!
//! fn render(personal: &Personal, data: &CvData) {
//!     let window = YearWindow::last_years(2024, 5);
//!     let ctx = DocumentContext::build(personal, data, &window);
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(markup) = renderer.render(&ctx) {
//!             println!("{} bytes of markup", markup.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod format;
pub mod sections;
pub mod window;

pub use context::DocumentContext;
pub use engine::Renderer;
pub use error::RenderError;
pub use window::YearWindow;
