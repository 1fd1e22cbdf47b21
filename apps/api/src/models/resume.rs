use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A loosely-typed entry (education, experience, project). Only "is an object" is enforced.
pub type Record = Map<String, Value>;

/// Structured fields extracted from a resume.
///
/// Every field defaults to empty. Unknown keys are ignored and `null` reads as empty,
/// so any JSON object whose known keys have the right shape deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedFields {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Record>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Record>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Record>,
    #[serde(deserialize_with = "null_as_default")]
    pub socials: BTreeMap<String, String>,
}

/// Every key a serialized `ParsedFields` carries.
#[cfg(test)]
pub const FIELD_KEYS: [&str; 9] = [
    "name",
    "email",
    "phone",
    "location",
    "skills",
    "education",
    "experience",
    "projects",
    "socials",
];

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
