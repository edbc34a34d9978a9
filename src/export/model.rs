use crate::models::AttendanceEvent;
use serde::Serialize;

/// Flat row for exporting reconciled events.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventExport {
    pub id: String,
    pub worker_id: String,
    pub worker_name: String,
    pub date: String,
    pub in_time: String,
    pub out_time: String,
    pub duration: String,
    pub status: String,
    pub current_status: String,
    pub confidence: f64,
}

impl From<&AttendanceEvent> for EventExport {
    fn from(e: &AttendanceEvent) -> Self {
        Self {
            id: e.id.clone(),
            worker_id: e.worker_id.clone(),
            worker_name: e.worker_name.clone(),
            date: e.date_str(),
            in_time: e.in_timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            out_time: e
                .out_timestamp
                .map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string())
                .unwrap_or_default(),
            duration: e.duration_label.clone(),
            status: e.status.to_string(),
            current_status: e.presence_str().to_string(),
            confidence: e.confidence,
        }
    }
}
