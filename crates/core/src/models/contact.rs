use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

/// Civility of the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Civilite {
    #[serde(rename = "Mme")]
    Mme,
    #[serde(rename = "M")]
    M,
}

impl Civilite {
    pub const ALL: [Civilite; 2] = [Civilite::Mme, Civilite::M];

    pub fn as_str(&self) -> &'static str {
        match self {
            Civilite::Mme => "Mme",
            Civilite::M => "M",
        }
    }
}

impl fmt::Display for Civilite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Civilite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Civilite::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown civility: {}", s))
    }
}

/// Why the visitor is getting in touch with the agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotifContact {
    DemandeVisite,
    EtreRappele,
    PlusPhotos,
}

impl MotifContact {
    pub const ALL: [MotifContact; 3] = [
        MotifContact::DemandeVisite,
        MotifContact::EtreRappele,
        MotifContact::PlusPhotos,
    ];

    /// Wire value, as stored in `contacts.motif_contact`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MotifContact::DemandeVisite => "demande_visite",
            MotifContact::EtreRappele => "etre_rappele",
            MotifContact::PlusPhotos => "plus_photos",
        }
    }

    /// Label shown next to the radio button.
    pub fn label(&self) -> &'static str {
        match self {
            MotifContact::DemandeVisite => "Demande de visite",
            MotifContact::EtreRappele => "Être rappelé(e)",
            MotifContact::PlusPhotos => "Plus de photos",
        }
    }
}

impl fmt::Display for MotifContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotifContact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MotifContact::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("Unknown contact reason: {}", s))
    }
}

/// Contact form payload as it travels over the wire.
///
/// Every scalar is kept as a raw string: the endpoint sanitizes and
/// validates it, and the form fills it from its typed state. Field types
/// are coerced rather than rejected: absent and `null` fields read as empty
/// strings and numbers arrive as their decimal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub civilite: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub nom: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub prenom: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub email: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub telephone: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub message: String,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub motif_contact: String,
    /// Slot timestamps formatted as `YYYY-MM-DD HH:MM:00`.
    #[serde(default, deserialize_with = "slot_list")]
    pub disponibilites: Vec<String>,
}

/// Reads any JSON value as a form field: strings as-is, numbers and
/// booleans stringified, everything else empty.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| scalar_text(&value).unwrap_or_default())
}

/// Reads `disponibilites` as a list of scalars. A non-array value means no
/// slots; `null` and structured entries are dropped.
fn slot_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(entries) => entries.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// A contact that passed sanitizing and validation, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub civilite: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub message: String,
    pub motif_contact: String,
}

/// Output of the validation pipeline: the contact row plus the slot
/// strings to insert under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub contact: NewContact,
    /// Non-empty slot strings, passed through to storage unchecked.
    pub disponibilites: Vec<String>,
}
