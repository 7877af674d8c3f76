use super::dates::empty_string_as_none;
use super::domain::{StudentId, StudentRecord};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid roster JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads student records exported from the students API, either as a JSON array or as CSV.
pub struct RosterImporter;

impl RosterImporter {
    /// `.json` files are read as JSON; anything else as CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<StudentRecord>, RosterImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let records = if is_json {
            Self::from_reader_json(file)?
        } else {
            Self::from_reader_csv(file)?
        };

        info!(path = %path.display(), students = records.len(), "roster imported");
        Ok(records)
    }

    pub fn from_reader_json<R: Read>(reader: R) -> Result<Vec<StudentRecord>, RosterImportError> {
        let records: Vec<StudentRecord> = serde_json::from_reader(reader)?;
        Ok(dedupe(records))
    }

    pub fn from_reader_csv<R: Read>(reader: R) -> Result<Vec<StudentRecord>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize::<RosterRow>() {
            records.push(row?.into_record());
        }

        Ok(dedupe(records))
    }
}

/// Repeated ids keep their first occurrence.
fn dedupe(records: Vec<StudentRecord>) -> Vec<StudentRecord> {
    let mut seen: HashSet<StudentId> = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.id.clone());
            if !fresh {
                warn!(student_id = %record.id, "duplicate student row ignored");
            }
            fresh
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    name: String,
    course: String,
    class: String,
    #[serde(rename = "startDate", default, deserialize_with = "empty_string_as_none")]
    start_date: Option<String>,
    #[serde(rename = "endDate", default, deserialize_with = "empty_string_as_none")]
    end_date: Option<String>,
    #[serde(rename = "registeredBy", default, deserialize_with = "empty_string_as_none")]
    registered_by: Option<String>,
    #[serde(rename = "registeredAt", default, deserialize_with = "empty_string_as_none")]
    registered_at: Option<String>,
    #[serde(rename = "lastRecordAt", default, deserialize_with = "empty_string_as_none")]
    last_record_at: Option<String>,
}

impl RosterRow {
    fn into_record(self) -> StudentRecord {
        StudentRecord {
            id: StudentId::new(self.id),
            name: self.name,
            course: self.course,
            class_name: self.class,
            start_date: self.start_date,
            end_date: self.end_date,
            registered_by: self.registered_by,
            registered_at: self.registered_at,
            last_record_at: self.last_record_at,
        }
    }
}
