//! Terminal renderings of the attendance views.

use crate::core::metrics::ALERT_HIGH_CONFIDENCE;
use crate::core::{DashboardMetrics, HourlyReport, Page, WorkerSummary};
use crate::models::AttendanceEvent;
use crate::utils::colors::{
    CYAN, GREEN, RED, YELLOW, color_for_confidence, color_for_status, colorize_optional, paint,
};
use crate::utils::table::{Column, Table};

pub const NO_RECORDS: &str = "No records found.";
pub const ALL_CLEAR: &str = "All clear: no unknown persons detected today.";

/// Attendance log page with its pagination footer.
pub fn render_events(page: &Page<'_, &AttendanceEvent>) -> String {
    if page.items.is_empty() {
        return format!("{NO_RECORDS}\n{}   {}\n", page.footer(), page.navigation());
    }

    let mut table = Table::new(vec![
        Column::new("Date / Time", 16),
        Column::new("Employee", 18),
        Column::new("Out", 5),
        Column::new("Duration", 16),
        Column::new("Status", 10),
        Column::new("Now", 8),
        Column::new("Conf.", 5),
    ]);

    for e in page.items {
        let now = if e.currently_present {
            paint(e.presence_str(), GREEN)
        } else {
            e.presence_str().to_string()
        };

        table.add_row(vec![
            e.in_str(),
            e.worker_name.clone(),
            colorize_optional(&e.out_str()),
            colorize_optional(&e.duration_label),
            paint(e.status.as_str(), color_for_status(e.status)),
            now,
            paint(
                &format!("{:.0}%", e.confidence),
                color_for_confidence(e.confidence_level()),
            ),
        ]);
    }

    format!(
        "{}\n{}   {}\n",
        table.render(),
        page.footer(),
        page.navigation()
    )
}

pub fn render_workers(summaries: &[WorkerSummary]) -> String {
    if summaries.is_empty() {
        return format!("{NO_RECORDS}\n");
    }

    let mut table = Table::new(vec![
        Column::new("Worker", 18),
        Column::new("Sessions", 8),
        Column::new("Open", 4),
        Column::new("Worked", 8),
        Column::new("First seen", 16),
        Column::new("Last seen", 16),
        Column::new("Present", 7),
    ]);

    for s in summaries {
        table.add_row(vec![
            s.worker_name.clone(),
            s.sessions.to_string(),
            s.open_sessions.to_string(),
            s.total_label(),
            s.first_seen.format("%Y-%m-%d %H:%M").to_string(),
            s.last_seen.format("%Y-%m-%d %H:%M").to_string(),
            if s.currently_present {
                paint("yes", GREEN)
            } else {
                "no".to_string()
            },
        ]);
    }

    table.render()
}

pub fn render_hourly(report: &HourlyReport) -> String {
    if report.workers.is_empty() {
        return format!("{NO_RECORDS}\n");
    }

    let mut columns = vec![Column::new("Time slot", 9)];
    columns.extend(report.workers.iter().map(|w| Column::new(w, 4)));
    let mut table = Table::new(columns);

    for slot in &report.slots {
        let mut row = vec![slot.label.clone()];
        for w in &report.workers {
            let cell = match slot.minutes.get(w).copied().flatten() {
                Some(0) => "0".to_string(),
                Some(m) => paint(&m.to_string(), CYAN),
                None => colorize_optional("-"),
            };
            row.push(cell);
        }
        table.add_row(row);
    }

    table.render()
}

/// Headline figures followed by today's unknown-person alerts.
pub fn render_metrics(metrics: &DashboardMetrics) -> String {
    let mut out = String::new();

    let mut cards = Table::new(vec![Column::new("Metric", 16), Column::new("Value", 10)]);
    cards.add_row(vec![
        "Present now".to_string(),
        format!(
            "{} of {} workers",
            metrics.present_count, metrics.total_workers
        ),
    ]);
    cards.add_row(vec![
        "Unknown alerts".to_string(),
        format!("{} today", metrics.unknown_detections.len()),
    ]);
    cards.add_row(vec![
        "Avg confidence".to_string(),
        metrics.avg_confidence_label(),
    ]);
    out.push_str(&cards.render());
    out.push('\n');

    if metrics.unknown_detections.is_empty() {
        out.push_str(&paint(ALL_CLEAR, GREEN));
        out.push('\n');
        return out;
    }

    let mut alerts = Table::new(vec![
        Column::new("Detected at", 16),
        Column::new("Record", 8),
        Column::new("Conf.", 5),
    ]);
    for d in &metrics.unknown_detections {
        let color = if d.confidence >= ALERT_HIGH_CONFIDENCE {
            RED
        } else {
            YELLOW
        };
        alerts.add_row(vec![
            d.detected_at.format("%Y-%m-%d %H:%M").to_string(),
            d.event_id.clone(),
            paint(&format!("{:.0}%", d.confidence), color),
        ]);
    }
    out.push_str(&alerts.render());
    out
}
