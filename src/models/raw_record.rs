//! Backend-owned attendance row as served by `/api/attendance/raw`.
//!
//! Every field is optional and deserialized leniently: a value of the wrong
//! JSON type is read as absent instead of rejecting the whole payload.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAttendanceRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub person_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub in_time: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub out_time: Option<String>,

    #[serde(
        default,
        rename = "duration_sec",
        alias = "duration_seconds",
        deserialize_with = "lenient_number"
    )]
    pub duration_seconds: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub confidence: Option<f64>,
}

impl RawAttendanceRecord {
    /// An open session has no recorded out-time yet.
    pub fn is_open(&self) -> bool {
        self.out_time.is_none()
    }

    /// Convert one JSON row; anything that is not an object becomes an
    /// empty record so it is still counted.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Parse a backend payload. The top level must be a JSON array; individual
/// rows never fail.
pub fn parse_records(bytes: &[u8]) -> AppResult<Vec<RawAttendanceRecord>> {
    let value: Value = serde_json::from_slice(bytes)?;

    match value {
        Value::Array(rows) => Ok(rows.into_iter().map(RawAttendanceRecord::from_value).collect()),
        other => Err(AppError::Other(format!(
            "expected a JSON array of attendance rows, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let n = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(n.filter(|v| v.is_finite()))
}
