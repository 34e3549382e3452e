//! vitae core library — domain records, YAML data store, errors.
//!
//! Public API surface:
//! - [`types`] — typed record shapes and the [`types::CvData`] record store
//! - [`error`] — [`DataError`]
//! - [`store`] — load + validate

pub mod error;
pub mod store;
pub mod types;

pub use error::DataError;
pub use types::{
    AdminPosition, CourseLevel, CvData, Education, Grant, OtherWriting, PeerReview, Personal,
    Position, Presentation, PresentationKind, PubStatus, Publication, PublicationKind, Role,
    ServiceEntry, TeachingAssignment, WorkInProgress, YearSpan,
};
