//! Time utilities: parsing backend time-of-day strings and composing timestamps.

use super::date::parse_date;
use chrono::{NaiveDateTime, NaiveTime, Timelike};

const TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

/// Compose `date` + `time` into a timestamp; None if either is missing or
/// unparseable.
pub fn compose(date: Option<&str>, time: Option<&str>) -> Option<NaiveDateTime> {
    let d = parse_date(date?)?;
    let t = parse_time(time?)?;
    Some(d.and_time(t))
}

/// Seconds since midnight.
pub fn seconds_of_day(t: NaiveTime) -> i64 {
    i64::from(t.num_seconds_from_midnight())
}
