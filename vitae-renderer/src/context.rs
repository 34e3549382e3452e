//! Document context — ordered sections built from the record store.
//!
//! [`DocumentContext::build`] is the assembler: it runs every section
//! renderer against the window and lays the results out in the fixed
//! document order. A section (or subsection) whose filtered collection
//! is empty is omitted uniformly — no bare headings.

use serde::{Deserialize, Serialize};

use vitae_core::types::{CvData, Personal};

use crate::error::RenderError;
use crate::format::escape;
use crate::sections;
use crate::window::YearWindow;

/// Serializable rendering payload for the Typst template.
///
/// All strings are already Typst markup; the template only places them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentContext {
    pub name: String,
    pub affiliation: String,
    pub email: String,
    pub website: Option<String>,
    /// Present when a recency window is active, e.g. "Covering 2019–present".
    pub window_note: Option<String>,
    pub sections: Vec<SectionCtx>,
}

/// A top-level document section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCtx {
    pub title: String,
    pub entries: Vec<String>,
    pub subsections: Vec<SubsectionCtx>,
}

/// A nested subsection (Research and Service group their content).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsectionCtx {
    pub title: String,
    pub entries: Vec<String>,
}

fn push_flat(sections: &mut Vec<SectionCtx>, title: &str, entries: Vec<String>) {
    if entries.is_empty() {
        return;
    }
    sections.push(SectionCtx {
        title: title.to_owned(),
        entries,
        subsections: Vec::new(),
    });
}

fn push_grouped(sections: &mut Vec<SectionCtx>, title: &str, parts: Vec<(&str, Vec<String>)>) {
    let subsections: Vec<SubsectionCtx> = parts
        .into_iter()
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(subtitle, entries)| SubsectionCtx {
            title: subtitle.to_owned(),
            entries,
        })
        .collect();
    if subsections.is_empty() {
        return;
    }
    sections.push(SectionCtx {
        title: title.to_owned(),
        entries: Vec::new(),
        subsections,
    });
}

impl DocumentContext {
    /// Assemble the document in its fixed section order.
    pub fn build(personal: &Personal, data: &CvData, window: &YearWindow) -> Self {
        let mut out: Vec<SectionCtx> = Vec::new();

        push_flat(&mut out, "Academic Positions", sections::positions(&data.positions, window));
        push_flat(&mut out, "Education", sections::education(&data.education, window));
        push_flat(&mut out, "Other Roles", sections::other_roles(&data.roles, window));

        push_grouped(
            &mut out,
            "Research",
            vec![
                ("Peer-Reviewed Articles", sections::articles(&data.publications, window)),
                ("Book Chapters", sections::chapters(&data.publications, window)),
                ("Work in Progress", sections::work_in_progress(&data.wip)),
                ("Other Writing", sections::other_writing(&data.other_writing, window)),
            ],
        );

        push_flat(
            &mut out,
            "Invited Presentations",
            sections::invited_presentations(&data.presentations, window),
        );
        push_flat(&mut out, "Teaching Experience", sections::teaching(&data.teaching, window));
        push_flat(&mut out, "Grants & Awards", sections::grants(&data.grants, window));

        push_grouped(
            &mut out,
            "Service",
            vec![
                ("Administrative Positions", sections::admin_positions(&data.admin_positions, window)),
                ("Peer Reviews", sections::peer_reviews(&data.peer_reviews)),
                ("Other Service", sections::service(&data.service, window)),
            ],
        );

        DocumentContext {
            name: escape(&personal.name),
            affiliation: escape(&personal.affiliation),
            email: escape(&personal.email),
            website: personal.website.as_deref().map(escape),
            window_note: window.cutoff().map(|c| format!("Covering {c}–present")),
            sections: out,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
