use serde::{Deserialize, Deserializer};

/// Identifiers arrive as JSON strings or numbers depending on which endpoint produced them.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdentifier {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

/// Collapse a string-or-number identifier into its string form.
pub(crate) fn deserialize_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawIdentifier::deserialize(deserializer)?;
    Ok(match raw {
        RawIdentifier::Text(value) => value,
        RawIdentifier::Integer(value) => value.to_string(),
        RawIdentifier::Decimal(value) => value.to_string(),
    })
}
