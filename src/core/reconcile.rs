//! Turns raw backend attendance rows into display-ready events.
//!
//! One pass works against a single captured "as-of" timestamp: every row
//! sees the same "today", even if the pass straddles midnight.

use crate::models::{AttendanceEvent, RawAttendanceRecord, SessionStatus};
use crate::utils::date::parse_date;
use crate::utils::{display_name, minutes_label, time};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;

/// Identifier given to rows without a matched person.
pub const UNKNOWN_WORKER: &str = "Unknown";
pub const DEFAULT_CONFIDENCE: f64 = 98.0;

pub const LABEL_ONGOING: &str = "Ongoing";
pub const LABEL_NO_CHECKOUT: &str = "Did not checkout";

#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    pub as_of: NaiveDateTime,
    pub default_confidence: f64,
    /// Backend base URL used to build worker profile image links.
    pub profile_base: Option<String>,
}

impl ReconcileOptions {
    pub fn new(as_of: NaiveDateTime) -> Self {
        Self {
            as_of,
            default_confidence: DEFAULT_CONFIDENCE,
            profile_base: None,
        }
    }

    pub fn with_default_confidence(mut self, confidence: f64) -> Self {
        self.default_confidence = confidence;
        self
    }

    pub fn with_profile_base(mut self, base: Option<String>) -> Self {
        self.profile_base = base;
        self
    }
}

/// Resolve the worker id of a row, substituting [`UNKNOWN_WORKER`].
pub fn worker_id(record: &RawAttendanceRecord) -> &str {
    record.person_id.as_deref().unwrap_or(UNKNOWN_WORKER)
}

fn record_date(record: &RawAttendanceRecord) -> Option<NaiveDate> {
    record.date.as_deref().and_then(parse_date)
}

/// Workers with at least one open session dated `today`.
pub fn active_workers(records: &[RawAttendanceRecord], today: NaiveDate) -> HashSet<String> {
    records
        .iter()
        .filter(|r| r.is_open() && record_date(r) == Some(today))
        .map(|r| worker_id(r).to_string())
        .collect()
}

/// Reconcile raw rows into events, most recent first.
///
/// The output always has the same length as the input: malformed rows are
/// degraded to fallback values, never dropped.
pub fn reconcile(records: &[RawAttendanceRecord], opts: &ReconcileOptions) -> Vec<AttendanceEvent> {
    let today = opts.as_of.date();
    let active = active_workers(records, today);

    let mut events: Vec<AttendanceEvent> = records
        .iter()
        .enumerate()
        .map(|(index, record)| derive_event(index, record, today, &active, opts))
        .collect();

    // sort_by is stable: equal timestamps keep input order
    events.sort_by(|a, b| b.in_timestamp.cmp(&a.in_timestamp));
    events
}

fn derive_event(
    index: usize,
    record: &RawAttendanceRecord,
    today: NaiveDate,
    active: &HashSet<String>,
    opts: &ReconcileOptions,
) -> AttendanceEvent {
    let worker = worker_id(record).to_string();
    let session_date = record_date(record);

    let is_today = session_date == Some(today);
    let is_stale = record.is_open() && !is_today;

    let status = if is_stale {
        SessionStatus::Incomplete
    } else if record.is_open() {
        SessionStatus::Active
    } else {
        SessionStatus::Completed
    };

    let duration_label = match status {
        SessionStatus::Completed => minutes_label(record.duration_seconds),
        SessionStatus::Incomplete => LABEL_NO_CHECKOUT.to_string(),
        SessionStatus::Active => LABEL_ONGOING.to_string(),
    };

    let in_timestamp = time::compose(record.date.as_deref(), record.in_time.as_deref())
        .unwrap_or(opts.as_of);
    let out_timestamp = time::compose(record.date.as_deref(), record.out_time.as_deref());

    let profile_url = opts
        .profile_base
        .as_deref()
        .map(|base| format!("{}/api/workers/{}/image", base.trim_end_matches('/'), worker))
        .unwrap_or_default();

    AttendanceEvent {
        id: format!("evt-{index}"),
        worker_name: display_name(&worker),
        currently_present: active.contains(&worker),
        worker_id: worker,
        session_date,
        in_timestamp,
        out_timestamp,
        duration_seconds: record.duration_seconds,
        duration_label,
        status,
        confidence: record
            .confidence
            .unwrap_or(opts.default_confidence)
            .clamp(0.0, 100.0),
        profile_url,
    }
}
