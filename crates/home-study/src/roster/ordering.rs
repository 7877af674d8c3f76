use super::domain::{StudentRecord, StudentStatus};
use super::status::classify;
use crate::clock::Clock;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// How a roster is ordered for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterOrdering {
    /// Status rank first, then deadline, activity, course, class and name.
    #[default]
    StatusFirst,
    /// Same chain without the status rank.
    DeadlineFirst,
    /// Keep the order the records were supplied in.
    AsProvided,
}

impl RosterOrdering {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "status_first" | "status" => Some(Self::StatusFirst),
            "deadline_first" | "deadline" => Some(Self::DeadlineFirst),
            "as_provided" | "manual" => Some(Self::AsProvided),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StatusFirst => "status_first",
            Self::DeadlineFirst => "deadline_first",
            Self::AsProvided => "as_provided",
        }
    }
}

/// Order students with the status-first policy, reading time from `clock`.
pub fn sort_students(records: &[StudentRecord], clock: &dyn Clock) -> Vec<StudentRecord> {
    sort_students_at(records, clock.now())
}

/// Order students with the status-first policy as of `now`. The input is left untouched.
pub fn sort_students_at(records: &[StudentRecord], now: NaiveDateTime) -> Vec<StudentRecord> {
    order_students(records, RosterOrdering::StatusFirst, now)
}

pub fn order_students(
    records: &[StudentRecord],
    ordering: RosterOrdering,
    now: NaiveDateTime,
) -> Vec<StudentRecord> {
    order_indices(records, ordering, now)
        .into_iter()
        .map(|index| records[index].clone())
        .collect()
}

/// Positions of `records` in display order.
pub(crate) fn order_indices(
    records: &[StudentRecord],
    ordering: RosterOrdering,
    now: NaiveDateTime,
) -> Vec<usize> {
    let keys: Vec<SortKey<'_>> = records
        .iter()
        .map(|record| SortKey::new(record, now))
        .collect();
    let mut indices: Vec<usize> = (0..records.len()).collect();

    match ordering {
        RosterOrdering::StatusFirst => indices.sort_by(|&a, &b| {
            keys[a]
                .status
                .rank()
                .cmp(&keys[b].status.rank())
                .then_with(|| keys[a].cmp_after_status(&keys[b]))
        }),
        RosterOrdering::DeadlineFirst => {
            indices.sort_by(|&a, &b| keys[a].cmp_after_status(&keys[b]))
        }
        RosterOrdering::AsProvided => {}
    }

    indices
}

struct SortKey<'a> {
    record: &'a StudentRecord,
    status: StudentStatus,
    end: Option<NaiveDateTime>,
    activity: NaiveDateTime,
}

impl<'a> SortKey<'a> {
    fn new(record: &'a StudentRecord, now: NaiveDateTime) -> Self {
        Self {
            record,
            status: classify(record, now),
            end: record.end_at(),
            activity: record.last_activity_at().unwrap_or_default(),
        }
    }

    fn cmp_after_status(&self, other: &Self) -> Ordering {
        cmp_deadline(self.end, other.end)
            .then_with(|| other.activity.cmp(&self.activity))
            .then_with(|| collate(&self.record.course, &other.record.course))
            .then_with(|| collate(&self.record.class_name, &other.record.class_name))
            .then_with(|| collate(&self.record.name, &other.record.name))
    }
}

/// Soonest deadline first; a missing deadline sorts as if it never arrives.
fn cmp_deadline(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare display strings ignoring case and diacritics, falling back to an exact comparison.
///
/// Both sides are decomposed first, so composed and decomposed spellings of a name collate equal.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(fold(b))
        .then_with(|| a.nfc().cmp(b.nfc()))
}

fn fold(value: &str) -> impl Iterator<Item = char> + '_ {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}
