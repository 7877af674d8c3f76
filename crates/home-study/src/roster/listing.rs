use super::domain::{StudentRecord, StudentStatus};
use super::ordering::{order_indices, RosterOrdering};
use super::status::{classify, days_left};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Window used by the teacher dashboard's "recent records" counter.
pub const RECENT_REGISTRATION_DAYS: i64 = 7;

const ANY: &str = "all";

/// Roster narrowing as offered by the student list: name search plus course and class pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default, rename = "class")]
    pub class_name: Option<String>,
}

impl RosterFilter {
    pub fn matches(&self, record: &StudentRecord) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => record
                .name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        };

        matches_search
            && picker_matches(self.course.as_deref(), &record.course)
            && picker_matches(self.class_name.as_deref(), &record.class_name)
    }
}

fn picker_matches(selected: Option<&str>, value: &str) -> bool {
    match selected {
        None => true,
        Some(choice) if choice == ANY => true,
        Some(choice) => choice == value,
    }
}

/// Distinct values available to the course and class pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterFacets {
    pub courses: Vec<String>,
    pub classes: Vec<String>,
}

impl RosterFacets {
    pub fn collect(records: &[StudentRecord]) -> Self {
        let courses: BTreeSet<&str> = records.iter().map(|r| r.course.as_str()).collect();
        let classes: BTreeSet<&str> = records.iter().map(|r| r.class_name.as_str()).collect();

        Self {
            courses: courses.into_iter().map(str::to_string).collect(),
            classes: classes.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Coordinator dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub active: usize,
    pub ending_soon: usize,
    pub ended: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn tally(records: &[StudentRecord], now: NaiveDateTime) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut counts, record| {
                counts.record(classify(record, now));
                counts
            })
    }

    fn record(&mut self, status: StudentStatus) {
        match status {
            StudentStatus::Active => self.active += 1,
            StudentStatus::EndingSoon => self.ending_soon += 1,
            StudentStatus::Ended => self.ended += 1,
        }
        self.total += 1;
    }

    pub fn get(&self, status: StudentStatus) -> usize {
        match status {
            StudentStatus::Active => self.active,
            StudentStatus::EndingSoon => self.ending_soon,
            StudentStatus::Ended => self.ended,
        }
    }
}

/// Students registered no more than `days` days before `now`. Unreadable registration dates never count.
pub fn recent_registrations(records: &[StudentRecord], now: NaiveDateTime, days: i64) -> usize {
    let window = Duration::days(days);
    records
        .iter()
        .filter_map(|record| {
            record
                .registered_at
                .as_deref()
                .and_then(super::dates::parse_timestamp)
        })
        .filter(|registered| now - *registered <= window)
        .count()
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    #[serde(flatten)]
    pub student: StudentRecord,
    pub status: StudentStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_left: Option<f64>,
}

impl RosterEntry {
    pub fn evaluate(student: StudentRecord, now: NaiveDateTime) -> Self {
        let status = classify(&student, now);
        let days_left = days_left(&student, now);
        Self {
            student,
            status,
            status_label: status.label(),
            days_left,
        }
    }
}

/// A filtered, ordered roster ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct RosterListing {
    pub evaluated_at: NaiveDateTime,
    pub ordering: RosterOrdering,
    pub facets: RosterFacets,
    pub counts: StatusCounts,
    pub students: Vec<RosterEntry>,
}

impl RosterListing {
    /// Facets describe the whole input; counts and entries describe the filtered result.
    pub fn build(
        records: &[StudentRecord],
        filter: &RosterFilter,
        ordering: RosterOrdering,
        now: NaiveDateTime,
    ) -> Self {
        let facets = RosterFacets::collect(records);
        let filtered: Vec<StudentRecord> = records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();

        let counts = StatusCounts::tally(&filtered, now);
        let students = order_indices(&filtered, ordering, now)
            .into_iter()
            .map(|index| RosterEntry::evaluate(filtered[index].clone(), now))
            .collect();

        Self {
            evaluated_at: now,
            ordering,
            facets,
            counts,
            students,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
