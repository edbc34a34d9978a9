use chrono::{Local, NaiveDate, NaiveDateTime};

/// Local wall-clock "now", captured once per reconciliation pass.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a backend date. Accepts `YYYY-MM-DD` and ISO datetimes whose
/// first ten characters are the date (`2025-01-01T08:00:00`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    match s.get(..10) {
        Some(head) if matches!(s.as_bytes().get(10), Some(b'T') | Some(b' ')) => {
            NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
        }
        _ => None,
    }
}
