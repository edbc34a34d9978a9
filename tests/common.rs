#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use rattendance::models::RawAttendanceRecord;
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn yesterday() -> NaiveDate {
    today() - Duration::days(1)
}

pub fn ymd(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Fixed as-of timestamp for reconciliation tests.
pub fn as_of(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S")
        .expect("valid as-of")
}

pub fn open(person: Option<&str>, date: &str, in_time: &str) -> RawAttendanceRecord {
    RawAttendanceRecord {
        person_id: person.map(str::to_string),
        date: Some(date.to_string()),
        in_time: Some(in_time.to_string()),
        ..Default::default()
    }
}

pub fn closed(
    person: &str,
    date: &str,
    in_time: &str,
    out_time: &str,
    duration: f64,
) -> RawAttendanceRecord {
    RawAttendanceRecord {
        person_id: Some(person.to_string()),
        date: Some(date.to_string()),
        in_time: Some(in_time.to_string()),
        out_time: Some(out_time.to_string()),
        duration_seconds: Some(duration),
        confidence: Some(95.0),
    }
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a backend-shaped JSON payload and return its path.
pub fn write_rows(name: &str, rows: &[Value]) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, serde_json::to_string_pretty(rows).expect("serialize rows"))
        .expect("write rows");
    path
}

/// A small mixed dataset relative to today.
pub fn sample_rows() -> Vec<Value> {
    let t = ymd(today());
    let y = ymd(yesterday());
    vec![
        json!({"person_id": "john_doe", "date": y, "in_time": "08:00:00", "out_time": "12:00:00", "duration_sec": 14400, "confidence": 96}),
        json!({"person_id": "jane_roe", "date": y, "in_time": "09:00:00", "out_time": null, "duration_sec": null, "confidence": 65}),
        json!({"person_id": "john_doe", "date": t, "in_time": "00:00:01", "out_time": null, "duration_sec": null, "confidence": 97}),
        json!({"person_id": null, "date": t, "in_time": "00:00:02", "out_time": "00:00:32", "duration_sec": 30, "confidence": 75}),
    ]
}

/// Non-existent config path so tests never read the user's real config.
pub fn isolated_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}
