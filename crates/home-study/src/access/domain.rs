use crate::identifier::deserialize_identifier;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(#[serde(deserialize_with = "deserialize_identifier")] pub String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role carried by an authenticated session.
///
/// Values outside the known set deserialize to `Unrecognized` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Coordinator,
    Teacher,
    #[serde(other)]
    Unrecognized,
}

impl Role {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "coordinator" => Self::Coordinator,
            "teacher" => Self::Teacher,
            _ => Self::Unrecognized,
        }
    }

    /// Landing view for the role, if it has one.
    pub const fn home_path(self) -> Option<&'static str> {
        match self {
            Self::Coordinator => Some("/coordinator"),
            Self::Teacher => Some("/teacher"),
            Self::Unrecognized => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Coordinator => "Coordinator",
            Self::Teacher => "Teacher",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

/// Authenticated user as supplied by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub name: String,
    pub role: Role,
}

impl Session {
    pub fn new(role: Role) -> Self {
        Self {
            user_id: None,
            name: String::new(),
            role,
        }
    }
}
