//! Section renderers — one per record collection.
//!
//! Each renderer applies the window policy matching its record shape,
//! then a collection-specific sort/group strategy, and emits one Typst
//! markup string per entry. All ordering rules live here; the assembler
//! in [`crate::context`] only decides which sections appear and where.

use std::cmp::Reverse;

use vitae_core::types::{
    AdminPosition, CourseLevel, Education, Grant, OtherWriting, PeerReview, Position,
    Presentation, PresentationKind, PubStatus, Publication, PublicationKind, Role, ServiceEntry,
    TeachingAssignment, WorkInProgress,
};

use crate::format::{
    amount, emph, escape, join_sentences, link, oxford_join, period_if_needed, with_period,
    year_range,
};
use crate::window::YearWindow;

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Group by key, preserving the order in which keys first appear.
///
/// The key sequence is fixed by first sighting and never resorted; only
/// the members of a group may be reordered by the caller.
fn group_in_order<'a, T, K, F>(items: Vec<&'a T>, key: F) -> Vec<(K, Vec<&'a T>)>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();
    for item in items {
        let k = key(item);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(item),
            None => groups.push((k, vec![item])),
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Ranged sections (source order, no grouping)
// ---------------------------------------------------------------------------

pub fn positions(items: &[Position], window: &YearWindow) -> Vec<String> {
    items
        .iter()
        .filter(|p| window.admits_span(&p.span))
        .map(|p| {
            let lead = match &p.department {
                Some(dept) => format!("{}, {}", escape(&p.title), escape(dept)),
                None => escape(&p.title),
            };
            join_sentences(&[lead, escape(&p.institution), year_range(&p.span)])
        })
        .collect()
}

pub fn education(items: &[Education], window: &YearWindow) -> Vec<String> {
    items
        .iter()
        .filter(|e| window.admits_span(&e.span))
        .map(|e| {
            join_sentences(&[
                escape(&e.degree),
                escape(&e.institution),
                year_range(&e.span),
            ])
        })
        .collect()
}

pub fn other_roles(items: &[Role], window: &YearWindow) -> Vec<String> {
    items
        .iter()
        .filter(|r| window.admits_span(&r.span))
        .map(|r| {
            join_sentences(&[
                escape(&r.title),
                escape(&r.organization),
                year_range(&r.span),
            ])
        })
        .collect()
}

pub fn admin_positions(items: &[AdminPosition], window: &YearWindow) -> Vec<String> {
    items
        .iter()
        .filter(|a| window.admits_span(&a.span))
        .map(|a| {
            join_sentences(&[
                escape(&a.title),
                escape(&a.institution),
                year_range(&a.span),
            ])
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Publications
// ---------------------------------------------------------------------------

/// Accepted work sorts before everything; then year descending. The sort
/// is stable, so same-year entries keep source order.
fn article_sort_year(p: &Publication) -> i32 {
    match p.status {
        PubStatus::Accepted => i32::MAX,
        PubStatus::Published => p.year.unwrap_or(i32::MIN),
    }
}

pub fn articles(publications: &[Publication], window: &YearWindow) -> Vec<String> {
    let mut kept: Vec<&Publication> = publications
        .iter()
        .filter(|p| p.kind == PublicationKind::Article && window.admits_publication(p))
        .collect();
    kept.sort_by_key(|p| Reverse(article_sort_year(p)));
    kept.iter().map(|p| article_entry(p)).collect()
}

pub fn chapters(publications: &[Publication], window: &YearWindow) -> Vec<String> {
    publications
        .iter()
        .filter(|p| p.kind == PublicationKind::Chapter && window.admits_publication(p))
        .map(chapter_entry)
        .collect()
}

fn year_display(publication: &Publication) -> Option<String> {
    match (publication.status, publication.year) {
        (PubStatus::Accepted, _) => Some("(accepted).".to_owned()),
        (PubStatus::Published, Some(year)) => Some(format!("({year}).")),
        (PubStatus::Published, None) => None,
    }
}

fn title_markup(title: &str, url: Option<&str>) -> String {
    let linked = match url {
        Some(u) => link(u, title),
        None => escape(title),
    };
    format!("{linked}{}", period_if_needed(title))
}

fn article_entry(p: &Publication) -> String {
    let mut parts: Vec<String> = vec![with_period(&escape(&p.authors))];
    if let Some(year) = year_display(p) {
        parts.push(year);
    }
    parts.push(title_markup(&p.title, p.url.as_deref()));

    let mut venue: Vec<String> = Vec::new();
    if let Some(journal) = &p.journal {
        venue.push(emph(journal));
    }
    if let Some(volume) = &p.volume {
        let mut vol = escape(volume);
        if let Some(number) = &p.number {
            vol.push_str(&format!("({})", escape(number)));
        }
        venue.push(vol);
    }
    if let Some(pages) = &p.pages {
        venue.push(escape(pages));
    }
    if !venue.is_empty() {
        parts.push(with_period(&venue.join(", ")));
    }
    if let Some(note) = &p.note {
        parts.push(with_period(&emph(note)));
    }
    parts.join(" ")
}

fn chapter_entry(p: &Publication) -> String {
    let mut parts: Vec<String> = vec![with_period(&escape(&p.authors))];
    if let Some(year) = year_display(p) {
        parts.push(year);
    }
    parts.push(title_markup(&p.title, p.url.as_deref()));

    if let Some(booktitle) = &p.booktitle {
        let mut book = format!("In {}", emph(booktitle));
        if let Some(editor) = &p.editor {
            book.push_str(&format!(", edited by {}", escape(editor)));
        }
        if let Some(pages) = &p.pages {
            book.push_str(&format!(", pp. {}", escape(pages)));
        }
        parts.push(with_period(&book));
    }
    if let Some(note) = &p.note {
        parts.push(with_period(&emph(note)));
    }
    parts.join(" ")
}

// ---------------------------------------------------------------------------
// Work in progress and other writing
// ---------------------------------------------------------------------------

pub fn work_in_progress(items: &[WorkInProgress]) -> Vec<String> {
    items
        .iter()
        .map(|w| {
            let mut parts: Vec<String> = vec![
                with_period(&escape(&w.authors)),
                title_markup(&w.title, w.url.as_deref()),
            ];
            if let Some(note) = &w.note {
                parts.push(with_period(&emph(note)));
            }
            parts.join(" ")
        })
        .collect()
}

pub fn other_writing(items: &[OtherWriting], window: &YearWindow) -> Vec<String> {
    let mut kept: Vec<&OtherWriting> = items
        .iter()
        .filter(|o| window.admits_year(o.year))
        .collect();
    kept.sort_by_key(|o| Reverse(o.year.unwrap_or(i32::MIN)));
    kept.iter()
        .map(|o| {
            let mut parts: Vec<String> = vec![with_period(&escape(&o.authors))];
            if let Some(year) = o.year {
                parts.push(format!("({year})."));
            }
            parts.push(title_markup(&o.title, o.url.as_deref()));
            if let Some(venue) = &o.venue {
                parts.push(with_period(&emph(venue)));
            }
            parts.join(" ")
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Invited presentations
// ---------------------------------------------------------------------------

/// Grouped by title in first-appearance order; venues within a group are
/// sorted by year descending.
pub fn invited_presentations(items: &[Presentation], window: &YearWindow) -> Vec<String> {
    let kept: Vec<&Presentation> = items
        .iter()
        .filter(|p| p.kind == PresentationKind::Invited && window.admits_year(p.year))
        .collect();

    group_in_order(kept, |p| p.title.clone())
        .into_iter()
        .map(|(title, mut members)| {
            members.sort_by_key(|p| Reverse(p.year.unwrap_or(i32::MIN)));
            let venues = members
                .iter()
                .map(|p| match p.year {
                    Some(year) => format!("{}, {year}", escape(&p.venue)),
                    None => escape(&p.venue),
                })
                .collect::<Vec<_>>()
                .join("; ");
            format!("{} {}", with_period(&escape(&title)), with_period(&venues))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Teaching
// ---------------------------------------------------------------------------

/// Grouped by institution in first-appearance order. Tense is present
/// when any course in the group is ongoing.
pub fn teaching(items: &[TeachingAssignment], window: &YearWindow) -> Vec<String> {
    let kept: Vec<&TeachingAssignment> = items
        .iter()
        .filter(|t| window.admits_span(&t.span))
        .collect();

    group_in_order(kept, |t| t.institution.clone())
        .into_iter()
        .map(|(institution, members)| teaching_entry(&institution, &members))
        .collect()
}

fn course_clause(courses: &[String], singular: &str, plural: &str) -> String {
    if courses.len() == 1 {
        format!("{singular} on {}", courses[0])
    } else {
        format!("{plural} on {}", oxford_join(courses, "and"))
    }
}

fn teaching_entry(institution: &str, members: &[&TeachingAssignment]) -> String {
    let verb = if members.iter().any(|t| t.span.ongoing()) {
        "Teach"
    } else {
        "Taught"
    };

    let graduate: Vec<String> = members
        .iter()
        .filter(|t| t.level == CourseLevel::Graduate)
        .map(|t| escape(&t.course))
        .collect();
    let undergraduate: Vec<String> = members
        .iter()
        .filter(|t| t.level == CourseLevel::Undergraduate)
        .map(|t| escape(&t.course))
        .collect();

    let mut clauses: Vec<String> = Vec::new();
    if !graduate.is_empty() {
        clauses.push(course_clause(&graduate, "a graduate course", "graduate courses"));
    }
    if !undergraduate.is_empty() {
        clauses.push(course_clause(
            &undergraduate,
            "an undergraduate course",
            "undergraduate courses",
        ));
    }

    let sentence = format!("{verb} {}", clauses.join(" and "));
    format!("{} {}", with_period(&escape(institution)), with_period(&sentence))
}

// ---------------------------------------------------------------------------
// Grants and service
// ---------------------------------------------------------------------------

pub fn grants(items: &[Grant], window: &YearWindow) -> Vec<String> {
    let mut kept: Vec<&Grant> = items
        .iter()
        .filter(|g| window.admits_year(g.year))
        .collect();
    kept.sort_by_key(|g| Reverse(g.year.unwrap_or(i32::MIN)));
    kept.iter().map(|g| grant_entry(g)).collect()
}

fn grant_entry(g: &Grant) -> String {
    let mut entry = escape(&g.title);
    if let Some(co) = &g.co_investigators {
        entry.push_str(&format!(" (with {})", escape(co)));
    }
    entry.push_str(&format!(", {}", escape(&g.funder)));
    if let Some(year) = g.year {
        entry.push_str(&format!(", {year}"));
    }
    if let Some(value) = g.amount {
        entry.push_str(&format!(" {}", escape(&format!("${}", amount(value)))));
    }
    with_period(&entry)
}

pub fn service(items: &[ServiceEntry], window: &YearWindow) -> Vec<String> {
    items
        .iter()
        .filter(|s| window.admits_year(s.year))
        .map(|s| {
            let lead = match &s.organization {
                Some(org) => format!("{}, {}", escape(&s.role), escape(org)),
                None => escape(&s.role),
            };
            let year = s.year.map(|y| y.to_string()).unwrap_or_default();
            join_sentences(&[lead, year])
        })
        .collect()
}

/// A single "Reviewer for ..." line; empty input yields no entries.
pub fn peer_reviews(items: &[PeerReview]) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }
    let venues: Vec<String> = items.iter().map(|r| emph(&r.venue)).collect();
    vec![format!("Reviewer for {}.", oxford_join(&venues, "and"))]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
