use crate::models::AttendanceEvent;
use crate::utils::secs2readable;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-worker totals over a set of events.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkerSummary {
    pub worker_id: String,
    pub worker_name: String,
    pub sessions: usize,
    pub open_sessions: usize,
    pub total_seconds: f64,
    pub first_seen: NaiveDateTime,
    pub last_seen: NaiveDateTime,
    pub currently_present: bool,
}

impl WorkerSummary {
    fn start(e: &AttendanceEvent) -> Self {
        Self {
            worker_id: e.worker_id.clone(),
            worker_name: e.worker_name.clone(),
            sessions: 0,
            open_sessions: 0,
            total_seconds: 0.0,
            first_seen: e.in_timestamp,
            last_seen: e.in_timestamp,
            currently_present: false,
        }
    }

    fn add(&mut self, e: &AttendanceEvent) {
        self.sessions += 1;
        if e.status.is_open() {
            self.open_sessions += 1;
        } else {
            self.total_seconds += e.duration_seconds.unwrap_or(0.0).max(0.0);
        }
        self.first_seen = self.first_seen.min(e.in_timestamp);
        self.last_seen = self.last_seen.max(e.in_timestamp);
        self.currently_present |= e.currently_present;
    }

    pub fn total_label(&self) -> String {
        secs2readable(self.total_seconds)
    }
}

/// Group events by worker, sorted by worker id.
pub fn summarize<'a, I>(events: I) -> Vec<WorkerSummary>
where
    I: IntoIterator<Item = &'a AttendanceEvent>,
{
    let mut by_worker: BTreeMap<String, WorkerSummary> = BTreeMap::new();

    for e in events {
        by_worker
            .entry(e.worker_id.clone())
            .or_insert_with(|| WorkerSummary::start(e))
            .add(e);
    }

    by_worker.into_values().collect()
}
