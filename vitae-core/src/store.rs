//! YAML data store — raw record shapes, loading, and validation.
//!
//! # Data layout
//!
//! ```text
//! <data_dir>/
//!   personal.yaml   (name, affiliation, email, website)
//!   records.yaml    (all record collections; absent collections are empty)
//! ```
//!
//! Raw records are flat string-field bags in which an empty string means
//! "unset". [`load_dir`] reads both files and validates every record into
//! the typed shapes in [`crate::types`]: required fields are checked,
//! year and amount strings are parsed, and records with unrecognized
//! discriminator values are reported and skipped rather than
//! miscategorized.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::DataError;
use crate::types::{
    AdminPosition, CourseLevel, CvData, Education, Grant, OtherWriting, PeerReview, Personal,
    Position, Presentation, PresentationKind, PubStatus, Publication, PublicationKind, Role,
    ServiceEntry, TeachingAssignment, WorkInProgress, YearSpan,
};

/// Raw publication types routed to the work-in-progress collection.
const WIP_TYPES: &[&str] = &["unpublished", "manuscript", "workingpaper", "inprogress"];

// ---------------------------------------------------------------------------
// Raw shapes (load-time only)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
struct RawPersonal {
    #[serde(default)]
    name: String,
    #[serde(default)]
    affiliation: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    website: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawPosition {
    #[serde(default)]
    title: String,
    #[serde(default)]
    department: String,
    #[serde(default)]
    institution: String,
    #[serde(default)]
    start_year: String,
    #[serde(default)]
    end_year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawEducation {
    #[serde(default)]
    degree: String,
    #[serde(default)]
    institution: String,
    #[serde(default)]
    start_year: String,
    #[serde(default)]
    end_year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawRole {
    #[serde(default)]
    title: String,
    #[serde(default)]
    organization: String,
    #[serde(default)]
    start_year: String,
    #[serde(default)]
    end_year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawAdminPosition {
    #[serde(default)]
    title: String,
    #[serde(default)]
    institution: String,
    #[serde(default)]
    start_year: String,
    #[serde(default)]
    end_year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawPublication {
    #[serde(default)]
    key: String,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    authors: String,
    #[serde(default)]
    year: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    journal: String,
    #[serde(default)]
    volume: String,
    #[serde(default)]
    number: String,
    #[serde(default)]
    pages: String,
    #[serde(default)]
    booktitle: String,
    #[serde(default)]
    editor: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    note: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawOtherWriting {
    #[serde(default)]
    authors: String,
    #[serde(default)]
    year: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    venue: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawPresentation {
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    venue: String,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawTeaching {
    #[serde(default)]
    institution: String,
    #[serde(default)]
    course: String,
    #[serde(default)]
    level: String,
    #[serde(default)]
    start_year: String,
    #[serde(default)]
    end_year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawGrant {
    #[serde(default)]
    title: String,
    #[serde(default)]
    funder: String,
    #[serde(default)]
    year: String,
    #[serde(default)]
    amount: String,
    #[serde(default)]
    co_investigators: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawService {
    #[serde(default)]
    role: String,
    #[serde(default)]
    organization: String,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawPeerReview {
    #[serde(default)]
    venue: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawRecords {
    #[serde(default)]
    positions: Vec<RawPosition>,
    #[serde(default)]
    education: Vec<RawEducation>,
    #[serde(default)]
    roles: Vec<RawRole>,
    #[serde(default)]
    publications: Vec<RawPublication>,
    #[serde(default)]
    other_writing: Vec<RawOtherWriting>,
    #[serde(default)]
    presentations: Vec<RawPresentation>,
    #[serde(default)]
    teaching: Vec<RawTeaching>,
    #[serde(default)]
    grants: Vec<RawGrant>,
    #[serde(default)]
    admin_positions: Vec<RawAdminPosition>,
    #[serde(default)]
    service: Vec<RawService>,
    #[serde(default)]
    peer_reviews: Vec<RawPeerReview>,
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `<data_dir>/personal.yaml` — pure, no I/O.
pub fn personal_path(data_dir: &Path) -> PathBuf {
    data_dir.join("personal.yaml")
}

/// `<data_dir>/records.yaml` — pure, no I/O.
pub fn records_path(data_dir: &Path) -> PathBuf {
    data_dir.join("records.yaml")
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load and validate `personal.yaml` and `records.yaml` from `data_dir`.
///
/// Returns `DataError::Parse` (with path and line context) on malformed
/// YAML, and a field-level validation error for the first bad record.
pub fn load_dir(data_dir: &Path) -> Result<(Personal, CvData), DataError> {
    let raw_personal: RawPersonal = read_yaml(&personal_path(data_dir))?;
    let raw_records: RawRecords = read_yaml(&records_path(data_dir))?;
    let personal = validate_personal(raw_personal)?;
    let data = validate_records(raw_records)?;
    Ok((personal, data))
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let contents = std::fs::read_to_string(path).map_err(|e| DataError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_yaml::from_str(&contents).map_err(|e| DataError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn opt(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn req(
    collection: &'static str,
    index: usize,
    field: &'static str,
    s: String,
) -> Result<String, DataError> {
    opt(s).ok_or(DataError::MissingField {
        collection,
        index,
        field,
    })
}

fn opt_year(
    collection: &'static str,
    index: usize,
    field: &'static str,
    s: &str,
) -> Result<Option<i32>, DataError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| DataError::MalformedYear {
            collection,
            index,
            field,
            value: trimmed.to_owned(),
        })
}

fn req_year(
    collection: &'static str,
    index: usize,
    field: &'static str,
    s: &str,
) -> Result<i32, DataError> {
    opt_year(collection, index, field, s)?.ok_or(DataError::MissingField {
        collection,
        index,
        field,
    })
}

/// Parse an amount string, accepting and stripping `$` and `,`.
fn opt_amount(
    collection: &'static str,
    index: usize,
    field: &'static str,
    s: &str,
) -> Result<Option<u64>, DataError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned
        .parse::<u64>()
        .map(Some)
        .map_err(|_| DataError::MalformedAmount {
            collection,
            index,
            field,
            value: trimmed.to_owned(),
        })
}

fn span(
    collection: &'static str,
    index: usize,
    start: &str,
    end: &str,
) -> Result<YearSpan, DataError> {
    Ok(YearSpan::new(
        req_year(collection, index, "start_year", start)?,
        opt_year(collection, index, "end_year", end)?,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_personal(raw: RawPersonal) -> Result<Personal, DataError> {
    Ok(Personal {
        name: req("personal", 0, "name", raw.name)?,
        affiliation: req("personal", 0, "affiliation", raw.affiliation)?,
        email: req("personal", 0, "email", raw.email)?,
        website: opt(raw.website),
    })
}

fn validate_records(raw: RawRecords) -> Result<CvData, DataError> {
    let mut data = CvData::default();

    for (i, r) in raw.positions.into_iter().enumerate() {
        data.positions.push(Position {
            title: req("positions", i, "title", r.title)?,
            department: opt(r.department),
            institution: req("positions", i, "institution", r.institution)?,
            span: span("positions", i, &r.start_year, &r.end_year)?,
        });
    }

    for (i, r) in raw.education.into_iter().enumerate() {
        data.education.push(Education {
            degree: req("education", i, "degree", r.degree)?,
            institution: req("education", i, "institution", r.institution)?,
            span: span("education", i, &r.start_year, &r.end_year)?,
        });
    }

    for (i, r) in raw.roles.into_iter().enumerate() {
        data.roles.push(Role {
            title: req("roles", i, "title", r.title)?,
            organization: req("roles", i, "organization", r.organization)?,
            span: span("roles", i, &r.start_year, &r.end_year)?,
        });
    }

    for (i, r) in raw.publications.into_iter().enumerate() {
        let kind_raw = r.kind.trim().to_ascii_lowercase();
        let status_raw = r.status.trim().to_ascii_lowercase();

        // Manuscripts and working papers belong to the WIP collection,
        // whatever their status says.
        if WIP_TYPES.contains(&kind_raw.as_str()) || status_raw == "wip" {
            data.wip.push(WorkInProgress {
                authors: req("publications", i, "authors", r.authors)?,
                title: req("publications", i, "title", r.title)?,
                url: opt(r.url),
                note: opt(r.note),
            });
            continue;
        }

        let kind = match PublicationKind::parse(&kind_raw) {
            Some(k) => k,
            None => {
                tracing::warn!(
                    "publications[{i}]: unrecognized type '{kind_raw}'; entry skipped"
                );
                continue;
            }
        };
        let status = match PubStatus::parse(&status_raw) {
            Some(s) => s,
            None => {
                tracing::warn!(
                    "publications[{i}]: unrecognized status '{status_raw}'; entry skipped"
                );
                continue;
            }
        };
        data.publications.push(Publication {
            key: opt(r.key),
            kind,
            status,
            authors: req("publications", i, "authors", r.authors)?,
            year: opt_year("publications", i, "year", &r.year)?,
            title: req("publications", i, "title", r.title)?,
            journal: opt(r.journal),
            volume: opt(r.volume),
            number: opt(r.number),
            pages: opt(r.pages),
            booktitle: opt(r.booktitle),
            editor: opt(r.editor),
            url: opt(r.url),
            note: opt(r.note),
        });
    }

    for (i, r) in raw.other_writing.into_iter().enumerate() {
        data.other_writing.push(OtherWriting {
            authors: req("other_writing", i, "authors", r.authors)?,
            year: opt_year("other_writing", i, "year", &r.year)?,
            title: req("other_writing", i, "title", r.title)?,
            venue: opt(r.venue),
            url: opt(r.url),
        });
    }

    for (i, r) in raw.presentations.into_iter().enumerate() {
        let kind = match PresentationKind::parse(&r.kind) {
            Some(k) => k,
            None => {
                tracing::warn!(
                    "presentations[{i}]: unrecognized type '{}'; entry skipped",
                    r.kind.trim()
                );
                continue;
            }
        };
        data.presentations.push(Presentation {
            kind,
            title: req("presentations", i, "title", r.title)?,
            venue: req("presentations", i, "venue", r.venue)?,
            year: opt_year("presentations", i, "year", &r.year)?,
        });
    }

    for (i, r) in raw.teaching.into_iter().enumerate() {
        let level = match CourseLevel::parse(&r.level) {
            Some(l) => l,
            None => {
                tracing::warn!(
                    "teaching[{i}]: unrecognized level '{}'; entry skipped",
                    r.level.trim()
                );
                continue;
            }
        };
        data.teaching.push(TeachingAssignment {
            institution: req("teaching", i, "institution", r.institution)?,
            course: req("teaching", i, "course", r.course)?,
            level,
            span: span("teaching", i, &r.start_year, &r.end_year)?,
        });
    }

    for (i, r) in raw.grants.into_iter().enumerate() {
        data.grants.push(Grant {
            title: req("grants", i, "title", r.title)?,
            funder: req("grants", i, "funder", r.funder)?,
            year: opt_year("grants", i, "year", &r.year)?,
            amount: opt_amount("grants", i, "amount", &r.amount)?,
            co_investigators: opt(r.co_investigators),
        });
    }

    for (i, r) in raw.admin_positions.into_iter().enumerate() {
        data.admin_positions.push(AdminPosition {
            title: req("admin_positions", i, "title", r.title)?,
            institution: req("admin_positions", i, "institution", r.institution)?,
            span: span("admin_positions", i, &r.start_year, &r.end_year)?,
        });
    }

    for (i, r) in raw.service.into_iter().enumerate() {
        data.service.push(ServiceEntry {
            role: req("service", i, "role", r.role)?,
            organization: opt(r.organization),
            year: opt_year("service", i, "year", &r.year)?,
        });
    }

    for (i, r) in raw.peer_reviews.into_iter().enumerate() {
        data.peer_reviews.push(PeerReview {
            venue: req("peer_reviews", i, "venue", r.venue)?,
        });
    }

    Ok(data)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
