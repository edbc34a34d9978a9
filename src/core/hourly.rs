//! Hourly occupancy matrix: minutes each worker spent inside every hour slot
//! of one day.

use super::reconcile::UNKNOWN_WORKER;
use crate::models::AttendanceEvent;
use crate::utils::time::seconds_of_day;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HourSlot {
    pub hour: u32,
    pub label: String,
    /// None: no records that day. Some(0): records, but none in this hour.
    pub minutes: BTreeMap<String, Option<u32>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HourlyReport {
    pub date: NaiveDate,
    pub workers: Vec<String>,
    pub slots: Vec<HourSlot>,
}

/// 9 → "9:00 AM", 12 → "12:00 PM", 0 → "12:00 AM", 14 → "2:00 PM"
pub fn slot_label(hour: u32) -> String {
    let (h, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{h}:00 {suffix}")
}

/// Whole minutes of overlap between `[in_s, out_s)` and `[start_s, end_s)`.
fn overlap_minutes(in_s: i64, out_s: i64, start_s: i64, end_s: i64) -> u32 {
    let from = in_s.max(start_s);
    let to = out_s.min(end_s);
    if from < to { ((to - from) / 60) as u32 } else { 0 }
}

/// Build the matrix for `date` over hours `[start_hour, end_hour)`.
///
/// Workers are every identified worker seen in `events`; only closed
/// sessions dated `date` contribute minutes.
pub fn build_hourly(
    events: &[AttendanceEvent],
    date: NaiveDate,
    start_hour: u32,
    end_hour: u32,
) -> HourlyReport {
    let workers: BTreeSet<&str> = events
        .iter()
        .map(|e| e.worker_id.as_str())
        .filter(|w| *w != UNKNOWN_WORKER)
        .collect();

    let day: Vec<&AttendanceEvent> = events
        .iter()
        .filter(|e| e.session_date == Some(date))
        .collect();

    let slots = (start_hour..end_hour)
        .map(|hour| {
            let start_s = i64::from(hour) * 3600;
            let end_s = start_s + 3600;

            let minutes = workers
                .iter()
                .map(|w| {
                    let mut seen = false;
                    let mut total = 0;
                    for e in day.iter().filter(|e| e.worker_id == *w) {
                        seen = true;
                        if let Some(out) = e.out_timestamp {
                            total += overlap_minutes(
                                seconds_of_day(e.in_timestamp.time()),
                                seconds_of_day(out.time()),
                                start_s,
                                end_s,
                            );
                        }
                    }
                    (w.to_string(), seen.then_some(total))
                })
                .collect();

            HourSlot {
                hour,
                label: slot_label(hour),
                minutes,
            }
        })
        .collect();

    HourlyReport {
        date,
        workers: workers.into_iter().map(str::to_string).collect(),
        slots,
    }
}
