use super::reconcile::UNKNOWN_WORKER;
use crate::models::AttendanceEvent;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeSet;

/// Alerts at or above this confidence are highlighted as likely strangers.
pub const ALERT_HIGH_CONFIDENCE: f64 = 85.0;

/// A row of today's log with no recognised person.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UnknownDetection {
    pub event_id: String,
    pub detected_at: NaiveDateTime,
    pub confidence: f64,
}

/// Headline figures for the day of `as_of`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardMetrics {
    pub day: NaiveDate,
    /// Identified workers with an open session today.
    pub present_count: usize,
    /// Identified workers seen anywhere in the loaded events.
    pub total_workers: usize,
    pub unknown_detections: Vec<UnknownDetection>,
    /// Mean confidence of today's rows; `None` when there are none.
    pub avg_confidence: Option<f64>,
}

impl DashboardMetrics {
    /// "Present 2/5 · Unknown alerts 1 · Avg confidence 91.5%"
    pub fn headline(&self) -> String {
        format!(
            "Present {}/{} · Unknown alerts {} · Avg confidence {}",
            self.present_count,
            self.total_workers,
            self.unknown_detections.len(),
            self.avg_confidence_label()
        )
    }

    pub fn avg_confidence_label(&self) -> String {
        self.avg_confidence
            .map(|c| format!("{c:.1}%"))
            .unwrap_or_else(|| "--".to_string())
    }
}

/// Compute the dashboard figures. Events keep their incoming order, so
/// detections come out newest first for a reconciled list.
pub fn compute_metrics<'a, I>(events: I, as_of: NaiveDateTime) -> DashboardMetrics
where
    I: IntoIterator<Item = &'a AttendanceEvent>,
{
    let day = as_of.date();
    let mut workers = BTreeSet::new();
    let mut present = BTreeSet::new();
    let mut unknown_detections = Vec::new();
    let mut confidence_sum = 0.0;
    let mut today_rows = 0usize;

    for e in events {
        let identified = e.worker_id != UNKNOWN_WORKER;
        if identified {
            workers.insert(e.worker_id.as_str());
            if e.currently_present {
                present.insert(e.worker_id.as_str());
            }
        }

        if e.session_date != Some(day) {
            continue;
        }

        today_rows += 1;
        confidence_sum += e.confidence;

        if !identified {
            unknown_detections.push(UnknownDetection {
                event_id: e.id.clone(),
                detected_at: e.in_timestamp,
                confidence: e.confidence,
            });
        }
    }

    DashboardMetrics {
        day,
        present_count: present.len(),
        total_workers: workers.len(),
        unknown_detections,
        avg_confidence: (today_rows > 0).then(|| confidence_sum / today_rows as f64),
    }
}
