//! Students under the home-study regime: lifecycle status, roster ordering and listing.

pub mod dates;
pub mod domain;
pub mod import;
pub mod intake;
pub mod listing;
pub mod ordering;
pub mod status;

pub use domain::{StudentId, StudentRecord, StudentStatus};
pub use import::{RosterImportError, RosterImporter};
pub use intake::{StudentDraft, StudentIntakeError, MINIMUM_REGIME_DAYS};
pub use listing::{
    recent_registrations, RosterEntry, RosterFacets, RosterFilter, RosterListing, StatusCounts,
    RECENT_REGISTRATION_DAYS,
};
pub use ordering::{collate, order_students, sort_students, sort_students_at, RosterOrdering};
pub use status::{classify, days_left, ENDING_SOON_DAYS};
