use crate::access::Session;
use crate::materials::{MaterialFilter, MaterialRecord};
use crate::roster::dates::parse_timestamp;
use crate::roster::{RosterFilter, RosterOrdering, StudentId, StudentRecord, StudentStatus};
use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct RosterRequest {
    pub(crate) students: Vec<StudentRecord>,
    #[serde(default)]
    pub(crate) filter: RosterFilter,
    #[serde(default)]
    pub(crate) ordering: Option<RosterOrdering>,
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub(crate) today: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RosterImportRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusRequest {
    pub(crate) students: Vec<StudentRecord>,
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub(crate) today: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusEntry {
    pub(crate) id: StudentId,
    pub(crate) status: StudentStatus,
    pub(crate) status_label: &'static str,
    pub(crate) days_left: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MaterialsRequest {
    pub(crate) materials: Vec<MaterialRecord>,
    pub(crate) student_id: StudentId,
    #[serde(default)]
    pub(crate) filter: MaterialFilter,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportRequest {
    pub(crate) student: StudentRecord,
    #[serde(default)]
    pub(crate) materials: Vec<MaterialRecord>,
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub(crate) today: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NavigationRequest {
    #[serde(default)]
    pub(crate) session: Option<Session>,
    pub(crate) path: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct NavigationResponse {
    pub(crate) decision: &'static str,
    pub(crate) redirect: Option<&'static str>,
}

/// Accepts the same date and timestamp shapes as stored records; blank means "now".
fn deserialize_optional_instant<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_timestamp(value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date `{value}`"))),
    }
}
