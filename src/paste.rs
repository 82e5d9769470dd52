use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paste {
    pub id: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Paste {
    /// The creation instant, if `created_at` holds a parseable timestamp.
    pub fn created_instant(&self) -> Option<DateTime<Utc>> {
        crate::format::parse_timestamp(&self.created_at)
    }
}

/// Render an instant the way pastes store it, e.g. `2024-01-02T03:04:05.678Z`.
pub fn timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a persisted collection, returning `None` if it is not a JSON array.
pub fn parse_collection(raw: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => Some(items),
        Ok(other) => {
            warn!("saved pastes are not an array (found {}), ignoring", kind_of(&other));
            None
        }
        Err(e) => {
            warn!("unable to parse saved pastes: {e}");
            None
        }
    }
}

/// Turn one persisted record into a [`Paste`], filling in missing fields.
///
/// - `id` and `content` default to the empty string.
/// - `createdAt` falls back to the legacy `created_at` field, then to `now`.
/// - Numbers and booleans are kept as their JSON text; `null` counts as missing.
/// - Anything other than an object is treated as a record with no fields.
pub fn normalize_record(record: &Value, now: DateTime<Utc>) -> Paste {
    let field = |name: &str| record.get(name).and_then(as_text);

    Paste {
        id: field("id").unwrap_or_default(),
        content: field("content").unwrap_or_default(),
        created_at: field("createdAt")
            .or_else(|| field("created_at"))
            .unwrap_or_else(|| timestamp(now)),
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
