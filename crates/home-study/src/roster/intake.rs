use super::dates::parse_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Shortest arrangement the coordinator may register, in days.
pub const MINIMUM_REGIME_DAYS: i64 = 15;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Student registration as submitted by a coordinator, before it reaches the students API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub course: String,
    #[serde(default, rename = "class")]
    pub class_name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudentIntakeError {
    #[error("student name is required")]
    MissingName,
    #[error("course is required")]
    MissingCourse,
    #[error("class is required")]
    MissingClass,
    #[error("start date is required")]
    MissingStartDate,
    #[error("end date is required")]
    MissingEndDate,
    #[error("{field} '{value}' is not a valid date")]
    InvalidDate { field: &'static str, value: String },
    #[error("end date must be after the start date")]
    EndNotAfterStart,
    #[error("home-study period must last at least {minimum} days (found {days})")]
    PeriodTooShort { minimum: i64, days: i64 },
}

impl StudentDraft {
    /// Checks run in form order; the first failure is reported.
    pub fn validate(&self) -> Result<(), StudentIntakeError> {
        require(&self.name, StudentIntakeError::MissingName)?;
        require(&self.course, StudentIntakeError::MissingCourse)?;
        require(&self.class_name, StudentIntakeError::MissingClass)?;
        require(&self.start_date, StudentIntakeError::MissingStartDate)?;
        require(&self.end_date, StudentIntakeError::MissingEndDate)?;

        let start = parse_field("startDate", &self.start_date)?;
        let end = parse_field("endDate", &self.end_date)?;

        if end <= start {
            return Err(StudentIntakeError::EndNotAfterStart);
        }

        let days = period_days(start, end);
        if days < MINIMUM_REGIME_DAYS {
            return Err(StudentIntakeError::PeriodTooShort {
                minimum: MINIMUM_REGIME_DAYS,
                days,
            });
        }

        Ok(())
    }
}

fn require(value: &str, error: StudentIntakeError) -> Result<(), StudentIntakeError> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(())
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<NaiveDateTime, StudentIntakeError> {
    parse_timestamp(value).ok_or_else(|| StudentIntakeError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Whole days spanned by the window, rounding partial days up.
fn period_days(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let millis = (end - start).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}
