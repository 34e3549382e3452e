//! Domain types for the vitae record store.
//!
//! Everything here is the *typed* layer: raw string-field YAML records are
//! converted into these shapes once at load time (see [`crate::store`]).
//! Empty strings become `None` at that boundary and never travel further.

use std::fmt;

// ---------------------------------------------------------------------------
// Year span
// ---------------------------------------------------------------------------

/// Inclusive year range. `end == None` means the item is current/ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSpan {
    pub start: i32,
    pub end: Option<i32>,
}

impl YearSpan {
    pub fn new(start: i32, end: Option<i32>) -> Self {
        YearSpan { start, end }
    }

    /// True when the item has no end year.
    pub fn ongoing(&self) -> bool {
        self.end.is_none()
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Course level for a teaching assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseLevel {
    Graduate,
    Undergraduate,
}

impl CourseLevel {
    /// Parse the raw discriminator. Returns `None` for unrecognized values;
    /// the store reports and skips those records rather than guessing.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graduate" => Some(CourseLevel::Graduate),
            "undergraduate" => Some(CourseLevel::Undergraduate),
            _ => None,
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseLevel::Graduate => write!(f, "graduate"),
            CourseLevel::Undergraduate => write!(f, "undergraduate"),
        }
    }
}

/// Publication kind, discriminated by the raw `type` field.
///
/// Work-in-progress types (`unpublished`, `manuscript`, `workingpaper`,
/// `inprogress`) are routed to [`WorkInProgress`] before this parse runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationKind {
    Article,
    Chapter,
}

impl PublicationKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "article" => Some(PublicationKind::Article),
            "incollection" => Some(PublicationKind::Chapter),
            _ => None,
        }
    }
}

/// Publication status. An empty raw status means published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PubStatus {
    Published,
    Accepted,
}

impl PubStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Some(PubStatus::Published),
            "accepted" => Some(PubStatus::Accepted),
            _ => None,
        }
    }
}

/// Presentation kind, discriminated by the raw `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationKind {
    Invited,
    Conference,
}

impl PresentationKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "invited" => Some(PresentationKind::Invited),
            "conference" => Some(PresentationKind::Conference),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Domain records
// ---------------------------------------------------------------------------

/// Name and contact block for the document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Personal {
    pub name: String,
    pub affiliation: String,
    pub email: String,
    pub website: Option<String>,
}

/// An academic position held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub title: String,
    pub department: Option<String>,
    pub institution: String,
    pub span: YearSpan,
}

/// A degree earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub span: YearSpan,
}

/// A non-academic or affiliated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub title: String,
    pub organization: String,
    pub span: YearSpan,
}

/// An administrative position (department chair, program director, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPosition {
    pub title: String,
    pub institution: String,
    pub span: YearSpan,
}

/// A published or accepted publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub key: Option<String>,
    pub kind: PublicationKind,
    pub status: PubStatus,
    pub authors: String,
    pub year: Option<i32>,
    pub title: String,
    pub journal: Option<String>,
    pub volume: Option<String>,
    pub number: Option<String>,
    pub pages: Option<String>,
    pub booktitle: Option<String>,
    pub editor: Option<String>,
    pub url: Option<String>,
    pub note: Option<String>,
}

/// An unpublished manuscript or working paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkInProgress {
    pub authors: String,
    pub title: String,
    pub url: Option<String>,
    pub note: Option<String>,
}

/// A non-peer-reviewed piece (op-ed, blog post, report).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherWriting {
    pub authors: String,
    pub year: Option<i32>,
    pub title: String,
    pub venue: Option<String>,
    pub url: Option<String>,
}

/// A single talk given at a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub kind: PresentationKind,
    pub title: String,
    pub venue: String,
    pub year: Option<i32>,
}

/// One course taught at an institution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeachingAssignment {
    pub institution: String,
    pub course: String,
    pub level: CourseLevel,
    pub span: YearSpan,
}

/// A grant or award. `amount == None` means undisclosed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub title: String,
    pub funder: String,
    pub year: Option<i32>,
    pub amount: Option<u64>,
    pub co_investigators: Option<String>,
}

/// A service entry. An unset year means the entry is not date-bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub role: String,
    pub organization: Option<String>,
    pub year: Option<i32>,
}

/// An outlet reviewed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerReview {
    pub venue: String,
}

// ---------------------------------------------------------------------------
// Record store
// ---------------------------------------------------------------------------

/// All loaded record collections. Immutable for the duration of a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CvData {
    pub positions: Vec<Position>,
    pub education: Vec<Education>,
    pub roles: Vec<Role>,
    pub publications: Vec<Publication>,
    pub wip: Vec<WorkInProgress>,
    pub other_writing: Vec<OtherWriting>,
    pub presentations: Vec<Presentation>,
    pub teaching: Vec<TeachingAssignment>,
    pub grants: Vec<Grant>,
    pub admin_positions: Vec<AdminPosition>,
    pub service: Vec<ServiceEntry>,
    pub peer_reviews: Vec<PeerReview>,
}

impl CvData {
    /// Per-collection record counts in a stable order, for summaries.
    pub fn collection_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("positions", self.positions.len()),
            ("education", self.education.len()),
            ("roles", self.roles.len()),
            ("publications", self.publications.len()),
            ("work in progress", self.wip.len()),
            ("other writing", self.other_writing.len()),
            ("presentations", self.presentations.len()),
            ("teaching", self.teaching.len()),
            ("grants", self.grants.len()),
            ("admin positions", self.admin_positions.len()),
            ("service", self.service.len()),
            ("peer reviews", self.peer_reviews.len()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_ongoing() {
        assert!(YearSpan::new(2015, None).ongoing());
        assert!(!YearSpan::new(2015, Some(2020)).ongoing());
    }

    #[test]
    fn course_level_parse() {
        assert_eq!(CourseLevel::parse("graduate"), Some(CourseLevel::Graduate));
        assert_eq!(CourseLevel::parse(" Undergraduate "), Some(CourseLevel::Undergraduate));
        assert_eq!(CourseLevel::parse("postdoc"), None);
    }

    #[test]
    fn publication_kind_parse() {
        assert_eq!(PublicationKind::parse("article"), Some(PublicationKind::Article));
        assert_eq!(PublicationKind::parse("incollection"), Some(PublicationKind::Chapter));
        assert_eq!(PublicationKind::parse("book"), None);
    }

    #[test]
    fn pub_status_parse_empty_means_published() {
        assert_eq!(PubStatus::parse(""), Some(PubStatus::Published));
        assert_eq!(PubStatus::parse("accepted"), Some(PubStatus::Accepted));
        assert_eq!(PubStatus::parse("rejected"), None);
    }

    #[test]
    fn presentation_kind_parse() {
        assert_eq!(PresentationKind::parse("invited"), Some(PresentationKind::Invited));
        assert_eq!(PresentationKind::parse("conference"), Some(PresentationKind::Conference));
        assert_eq!(PresentationKind::parse("keynote"), None);
    }

    #[test]
    fn collection_counts_cover_all_collections() {
        let data = CvData::default();
        assert_eq!(data.collection_counts().len(), 12);
        assert!(data.collection_counts().iter().all(|(_, n)| *n == 0));
    }
}
