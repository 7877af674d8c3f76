mod summary;
pub mod views;

pub use views::{ReportEntry, ReportStudent, ReportSummary, StudentReport, SubjectSection};
