// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use model::EventExport;

use crate::core::HourlyReport;
use crate::errors::AppResult;
use crate::models::AttendanceEvent;
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write reconciled events to `path`.
pub fn export_events<'a, I>(events: I, format: ExportFormat, path: &Path, force: bool) -> AppResult<()>
where
    I: IntoIterator<Item = &'a AttendanceEvent>,
{
    fs_utils::ensure_writable(path, force)?;

    let rows: Vec<EventExport> = events.into_iter().map(EventExport::from).collect();
    if rows.is_empty() {
        warning("No records match, writing an empty export.");
    }

    match format {
        ExportFormat::Csv => json_csv::export_csv(&rows, path),
        ExportFormat::Json => json_csv::export_json(&rows, path),
    }
}

/// Write the hourly occupancy matrix to `path`.
pub fn export_hourly(report: &HourlyReport, format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => json_csv::export_hourly_csv(report, path),
        ExportFormat::Json => json_csv::export_json(report, path),
    }
}
