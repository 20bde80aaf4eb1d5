//! Parsing helpers for structured LLM replies

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use tracing::warn;

use crate::domain::DomainError;

/// Extract the outermost JSON object from a reply (handles prose and code fences)
pub fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// Parse a structured reply into a wire record
pub fn parse_reply<T: DeserializeOwned>(capability: &str, reply: &str) -> Result<T, DomainError> {
    let json_str = extract_json(reply).unwrap_or(reply);

    serde_json::from_str(json_str).map_err(|e| {
        warn!(capability, error = %e, reply, "Malformed structured reply");
        DomainError::validation(format!("Malformed {} reply: {}", capability, e))
    })
}

/// Accepts `true`/`false` or the labels "yes"/"no"/"true"/"false"
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Label(label) => match label.trim().to_lowercase().as_str() {
            "yes" | "true" => Ok(true),
            "no" | "false" => Ok(false),
            other => Err(de::Error::custom(format!("unrecognized verdict '{}'", other))),
        },
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Label(String),
}

/// Like [`deserialize_flag`], but any label other than "yes"/"true" reads as `false`
pub fn deserialize_affirmative<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Label(label) => Ok(matches!(label.trim().to_lowercase().as_str(), "yes" | "true")),
    }
}
