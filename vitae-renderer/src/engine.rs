//! Tera engine — renders [`DocumentContext`] through the embedded template.
//!
//! The template is baked into the binary at compile time via `include_str!`
//! and carries document structure only (header, section headings, entry
//! paragraphs). Everything typographic belongs to the external typesetter.

use tera::Tera;

use crate::context::DocumentContext;
use crate::error::RenderError;

const CV_TEMPLATE: &str = include_str!("templates/cv.typ.tera");
const TEMPLATE_NAME: &str = "cv.typ";

/// Tera-based renderer. Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with the embedded template.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, CV_TEMPLATE)?;
        Ok(Renderer { tera })
    }

    /// Render the full Typst document for `ctx`.
    ///
    /// Line endings are normalised to LF.
    pub fn render(&self, ctx: &DocumentContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let rendered = self.tera.render(TEMPLATE_NAME, &tera_ctx)?;
        Ok(rendered.replace("\r\n", "\n"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{SectionCtx, SubsectionCtx};

    fn sample_context() -> DocumentContext {
        DocumentContext {
            name: "Jane Doe".to_owned(),
            affiliation: "X University".to_owned(),
            email: "jane@example.edu".to_owned(),
            website: Some("https://janedoe.example".to_owned()),
            window_note: None,
            sections: vec![
                SectionCtx {
                    title: "Academic Positions".to_owned(),
                    entries: vec!["Professor. X University. 2015–.".to_owned()],
                    subsections: vec![],
                },
                SectionCtx {
                    title: "Research".to_owned(),
                    entries: vec![],
                    subsections: vec![SubsectionCtx {
                        title: "Peer-Reviewed Articles".to_owned(),
                        entries: vec!["Doe, Jane. (2020). A Study.".to_owned()],
                    }],
                },
            ],
        }
    }

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with the embedded template");
    }

    #[test]
    fn render_places_header_and_sections() {
        let renderer = Renderer::new().unwrap();
        let out = renderer.render(&sample_context()).unwrap();
        assert!(out.contains("= Jane Doe"));
        assert!(out.contains("== Academic Positions"));
        assert!(out.contains("Professor. X University. 2015–."));
        assert!(out.contains("=== Peer-Reviewed Articles"));
        assert!(out.contains("https://janedoe.example"));
    }

    #[test]
    fn render_includes_window_note_when_set() {
        let mut ctx = sample_context();
        ctx.window_note = Some("Covering 2019–present".to_owned());
        let out = Renderer::new().unwrap().render(&ctx).unwrap();
        assert!(out.contains("_Covering 2019–present_"));
    }

    #[test]
    fn render_omits_website_line_when_absent() {
        let mut ctx = sample_context();
        ctx.website = None;
        let out = Renderer::new().unwrap().render(&ctx).unwrap();
        assert!(!out.contains("janedoe.example"));
    }

    #[test]
    fn no_crlf_in_rendered_output() {
        let out = Renderer::new().unwrap().render(&sample_context()).unwrap();
        assert!(!out.contains('\r'), "line endings not normalised");
    }
}
