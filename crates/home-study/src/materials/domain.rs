use crate::access::UserId;
use crate::identifier::deserialize_identifier;
use crate::roster::dates::parse_timestamp;
use crate::roster::StudentId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(#[serde(deserialize_with = "deserialize_identifier")] pub String);

impl MaterialId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Material,
    Activity,
}

impl MaterialKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Material => "Material",
            Self::Activity => "Activity",
        }
    }
}

/// Uploaded file reference. Upload handling lives outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Study material or activity a teacher posted for a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    pub id: MaterialId,
    pub student_id: StudentId,
    #[serde(default)]
    pub teacher_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<UserId>,
    pub subject: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub files: Vec<Attachment>,
    #[serde(default)]
    pub links: Vec<String>,
}

impl MaterialRecord {
    pub fn date_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date)
    }
}
