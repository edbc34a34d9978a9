use super::{confidence::ConfidenceLevel, session_status::SessionStatus};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Display-ready attendance row, rebuilt on every reconciliation pass.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttendanceEvent {
    pub id: String,                           // "evt-<input index>"
    pub worker_id: String,                    // person_id or "Unknown"
    pub worker_name: String,                  // worker_id with '_' → ' '
    pub session_date: Option<NaiveDate>,      // None when the row had no usable date
    pub in_timestamp: NaiveDateTime,          // date + in_time, or as-of fallback
    pub out_timestamp: Option<NaiveDateTime>, // date + out_time
    pub duration_seconds: Option<f64>,
    pub duration_label: String,
    pub status: SessionStatus,
    pub currently_present: bool,
    pub confidence: f64,
    pub profile_url: String,
}

impl AttendanceEvent {
    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence)
    }

    pub fn in_str(&self) -> String {
        self.in_timestamp.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn out_str(&self) -> String {
        self.out_timestamp
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }

    pub fn date_str(&self) -> String {
        self.session_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn presence_str(&self) -> &'static str {
        if self.currently_present {
            "Active"
        } else {
            "Inactive"
        }
    }
}
