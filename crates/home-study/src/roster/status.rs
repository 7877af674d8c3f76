use super::domain::{StudentRecord, StudentStatus};
use chrono::NaiveDateTime;

/// Remaining days, inclusive, at which an arrangement counts as ending soon.
pub const ENDING_SOON_DAYS: f64 = 7.0;

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Classify a student's arrangement at `now`.
///
/// Total over any record: an unreadable end date is `Ended`, and an
/// arrangement that has not started yet is reported as `Active`.
pub fn classify(record: &StudentRecord, now: NaiveDateTime) -> StudentStatus {
    let Some(end) = record.end_at() else {
        return StudentStatus::Ended;
    };

    if now > end {
        return StudentStatus::Ended;
    }

    if fractional_days_between(now, end) <= ENDING_SOON_DAYS {
        return StudentStatus::EndingSoon;
    }

    StudentStatus::Active
}

/// Fractional days from `now` until the end date; negative once it has passed.
pub fn days_left(record: &StudentRecord, now: NaiveDateTime) -> Option<f64> {
    record
        .end_at()
        .map(|end| fractional_days_between(now, end))
}

fn fractional_days_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_DAY
}
