//! Lead record and its classification enums.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Pipeline stage label.
///
/// The stage set is open: upstream sources may introduce new stage names at
/// any time, so unknown labels are preserved as [`Stage::Other`] instead of
/// failing deserialization. Stage transitions are owned upstream; this crate
/// only reads the label as a classification key, and the only classification
/// that matters here is terminal vs. open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    New,
    Contacted,
    Qualified,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
    Other(String),
}

impl Stage {
    /// Kebab-case wire label.
    pub fn as_str(&self) -> &str {
        match self {
            Stage::New => "new",
            Stage::Contacted => "contacted",
            Stage::Qualified => "qualified",
            Stage::Proposal => "proposal",
            Stage::Negotiation => "negotiation",
            Stage::ClosedWon => "closed-won",
            Stage::ClosedLost => "closed-lost",
            Stage::Other(label) => label,
        }
    }

    /// Terminal stages leave the active pipeline.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::ClosedWon | Stage::ClosedLost)
    }
}

impl From<&str> for Stage {
    fn from(label: &str) -> Self {
        match label {
            "new" => Stage::New,
            "contacted" => Stage::Contacted,
            "qualified" => Stage::Qualified,
            "proposal" => Stage::Proposal,
            "negotiation" => Stage::Negotiation,
            "closed-won" => Stage::ClosedWon,
            "closed-lost" => Stage::ClosedLost,
            other => Stage::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Stage {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Stage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Stage::from(label.as_str()))
    }
}

/// Lead priority. Defaults to medium when the source omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A sales lead as handed over by the upstream data layer.
///
/// Field names follow the dashboard's JSON shape (camelCase). Timestamps are
/// lenient: a value that is not an RFC 3339 string or an epoch-millisecond
/// number deserializes to `None` rather than rejecting the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Monetary value, non-negative.
    #[serde(default)]
    pub value: f64,
    pub stage: Stage,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub last_contact: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    /// Source channel (e.g. "referral", "webinar").
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Lead {
    /// Effective creation instant: recorded creation time if present, else
    /// the last-contact time, else the supplied fallback instant.
    pub fn effective_created_at(&self, fallback: DateTime<Utc>) -> DateTime<Utc> {
        self.created_at.or(self.last_contact).unwrap_or(fallback)
    }
}

/// Accepts RFC 3339 strings and epoch-millisecond numbers; anything else
/// (including garbage strings) becomes `None` instead of a parse error.
fn lenient_datetime<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    })
}
