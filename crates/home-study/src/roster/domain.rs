use super::dates::{empty_string_as_none, parse_timestamp};
use crate::identifier::deserialize_identifier;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque student identifier. Numeric ids from the API are kept in their string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(#[serde(deserialize_with = "deserialize_identifier")] pub String);

impl StudentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Student registered under the home-study regime, as served by the students API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: StudentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub course: String,
    #[serde(default, rename = "class")]
    pub class_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub registered_by: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub registered_at: Option<String>,
    #[serde(
        default,
        alias = "ultimoRegistroData",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_record_at: Option<String>,
}

impl StudentRecord {
    pub fn start_at(&self) -> Option<NaiveDateTime> {
        self.start_date.as_deref().and_then(parse_timestamp)
    }

    pub fn end_at(&self) -> Option<NaiveDateTime> {
        self.end_date.as_deref().and_then(parse_timestamp)
    }

    /// Most recent activity marker: `lastRecordAt` when present, otherwise `registeredAt`.
    ///
    /// A present but unparseable `lastRecordAt` does not fall through to
    /// `registeredAt`; it yields `None` like any other unreadable marker.
    pub fn last_activity_at(&self) -> Option<NaiveDateTime> {
        self.last_record_at
            .as_deref()
            .or(self.registered_at.as_deref())
            .and_then(parse_timestamp)
    }
}

/// Lifecycle of a home-study arrangement, derived on every evaluation and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    Active,
    EndingSoon,
    Ended,
}

impl StudentStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Active, Self::EndingSoon, Self::Ended]
    }

    /// Position in roster ordering; active students come first.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Active => 0,
            Self::EndingSoon => 1,
            Self::Ended => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::EndingSoon => "Ending soon",
            Self::Ended => "Ended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_numeric_ids_and_blank_dates() {
        let record: StudentRecord = serde_json::from_value(json!({
            "id": 42,
            "name": "Ana Souza",
            "course": "Administração",
            "class": "ADM-3A",
            "startDate": "2025-01-01",
            "endDate": "",
            "registeredBy": "coord@school.br",
            "registeredAt": "2025-01-01T09:00:00Z"
        }))
        .expect("record deserializes");

        assert_eq!(record.id, StudentId::new("42"));
        assert_eq!(record.class_name, "ADM-3A");
        assert!(record.end_date.is_none());
        assert!(record.end_at().is_none());
        assert!(record.last_record_at.is_none());
    }

    #[test]
    fn missing_display_fields_default_to_empty() {
        let record: StudentRecord = serde_json::from_value(json!({
            "id": 9,
            "endDate": "2025-04-30"
        }))
        .expect("record deserializes");

        assert!(record.name.is_empty());
        assert!(record.course.is_empty());
        assert!(record.class_name.is_empty());
        assert!(record.end_at().is_some());
    }

    #[test]
    fn accepts_legacy_last_record_field() {
        let record: StudentRecord = serde_json::from_value(json!({
            "id": "s-1",
            "name": "Bruno Lima",
            "course": "Engenharia",
            "class": "ENG-1B",
            "ultimoRegistroData": "2025-03-02"
        }))
        .expect("record deserializes");

        assert_eq!(record.last_record_at.as_deref(), Some("2025-03-02"));
        let serialized = serde_json::to_value(&record).expect("serializes");
        assert_eq!(serialized["id"], "s-1");
        assert_eq!(serialized["lastRecordAt"], "2025-03-02");
        assert_eq!(serialized["class"], "ENG-1B");
    }

    #[test]
    fn last_activity_prefers_last_record() {
        let mut record: StudentRecord = serde_json::from_value(json!({
            "id": "s-2",
            "name": "Carla Dias",
            "course": "Direito",
            "class": "DIR-2A",
            "registeredAt": "2025-01-05",
            "lastRecordAt": "2025-02-05"
        }))
        .expect("record deserializes");

        assert_eq!(record.last_activity_at(), parse_timestamp("2025-02-05"));

        record.last_record_at = None;
        assert_eq!(record.last_activity_at(), parse_timestamp("2025-01-05"));

        record.last_record_at = Some("garbled".to_string());
        assert!(record.last_activity_at().is_none());
    }

    #[test]
    fn status_rank_matches_ordered_listing() {
        let ranks: Vec<u8> = StudentStatus::ordered()
            .into_iter()
            .map(StudentStatus::rank)
            .collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }
}
