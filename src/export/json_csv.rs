use crate::core::HourlyReport;
use crate::errors::AppResult;
use crate::export::{EventExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json<T: serde::Serialize + ?Sized>(data: &T, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(data)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header from the serde field names).
pub(crate) fn export_csv(events: &[EventExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in events {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// One row per hour slot, one column per worker. Empty cell = no records.
pub(crate) fn export_hourly_csv(report: &HourlyReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting hourly report to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["time_slot".to_string()];
    header.extend(report.workers.iter().cloned());
    wtr.write_record(&header)?;

    for slot in &report.slots {
        let mut row = vec![slot.label.clone()];
        for w in &report.workers {
            let cell = slot
                .minutes
                .get(w)
                .copied()
                .flatten()
                .map(|m| m.to_string())
                .unwrap_or_default();
            row.push(cell);
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
