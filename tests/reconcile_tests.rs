mod common;
use common::{as_of, closed, open};
use rattendance::core::reconcile::{LABEL_NO_CHECKOUT, LABEL_ONGOING, UNKNOWN_WORKER, active_workers};
use rattendance::core::{ReconcileOptions, reconcile};
use rattendance::models::{RawAttendanceRecord, SessionStatus, parse_records};
use std::collections::HashMap;

const TODAY: &str = "2025-06-10";
const YESTERDAY: &str = "2025-06-09";

fn opts() -> ReconcileOptions {
    ReconcileOptions::new(as_of(TODAY, "12:00:00"))
}

#[test]
fn test_open_session_today_is_active_and_present() {
    let mut r = open(Some("w1"), TODAY, "09:00:00");
    r.confidence = Some(97.0);

    let events = reconcile(&[r], &opts());

    assert_eq!(events.len(), 1);
    let e = &events[0];
    assert_eq!(e.status, SessionStatus::Active);
    assert_eq!(e.duration_label, "Ongoing");
    assert!(e.currently_present);
    assert_eq!(e.confidence, 97.0);
    assert_eq!(e.in_timestamp, as_of(TODAY, "09:00:00"));
    assert_eq!(e.out_timestamp, None);
}

#[test]
fn test_open_session_yesterday_is_incomplete() {
    let events = reconcile(&[open(Some("w1"), YESTERDAY, "09:00:00")], &opts());

    let e = &events[0];
    assert_eq!(e.status, SessionStatus::Incomplete);
    assert_eq!(e.duration_label, "Did not checkout");
    assert!(!e.currently_present);
}

#[test]
fn test_missing_person_becomes_unknown() {
    let anonymous = open(None, TODAY, "10:00:00");
    let empty_id = RawAttendanceRecord {
        person_id: None,
        ..closed("x", TODAY, "08:00:00", "08:30:00", 1800.0)
    };

    let events = reconcile(&[anonymous, empty_id], &opts());

    assert_eq!(events.len(), 2);
    for e in &events {
        assert_eq!(e.worker_id, UNKNOWN_WORKER);
        assert_eq!(e.worker_name, "Unknown");
        // the open Unknown row today makes the whole bucket present
        assert!(e.currently_present);
    }
}

#[test]
fn test_closed_session_duration_label() {
    let events = reconcile(
        &[closed("w1", TODAY, "09:30:00", "17:30:00", 480.0)],
        &opts(),
    );

    let e = &events[0];
    assert_eq!(e.duration_label, "8.0 min");
    assert_eq!(e.status, SessionStatus::Completed);
    assert_eq!(e.out_timestamp, Some(as_of(TODAY, "17:30:00")));
    assert!(!e.currently_present);
}

#[test]
fn test_closed_session_without_duration_is_zero_minutes() {
    let mut r = closed("w1", YESTERDAY, "09:00:00", "10:00:00", 0.0);
    r.duration_seconds = None;

    let events = reconcile(&[r], &opts());
    let e = &events[0];
    assert_eq!(e.duration_label, "0 min");
    assert_eq!(e.status, SessionStatus::Completed);
}

#[test]
fn test_presence_is_global_across_worker_rows() {
    let records = vec![
        open(Some("w1"), YESTERDAY, "08:00:00"),
        closed("w1", TODAY, "07:00:00", "07:30:00", 1800.0),
        open(Some("w1"), TODAY, "09:00:00"),
        open(Some("w2"), YESTERDAY, "08:00:00"),
    ];

    let events = reconcile(&records, &opts());

    for e in events.iter().filter(|e| e.worker_id == "w1") {
        assert!(e.currently_present, "{} should be present", e.id);
    }
    let stale = events.iter().find(|e| e.id == "evt-0").expect("stale row kept");
    assert_eq!(stale.status, SessionStatus::Incomplete);

    let w2 = events.iter().find(|e| e.worker_id == "w2").expect("w2 kept");
    assert!(!w2.currently_present);
}

#[test]
fn test_presence_independent_of_input_order() {
    let records = vec![
        open(Some("a"), TODAY, "08:00:00"),
        closed("b", TODAY, "08:00:00", "09:00:00", 3600.0),
        open(Some("b"), YESTERDAY, "10:00:00"),
        open(None, YESTERDAY, "11:00:00"),
        closed("a", YESTERDAY, "08:00:00", "09:00:00", 3600.0),
    ];
    let mut reversed = records.clone();
    reversed.reverse();
    let mut rotated = records.clone();
    rotated.rotate_left(2);

    let presence = |rs: &[RawAttendanceRecord]| -> HashMap<String, bool> {
        reconcile(rs, &opts())
            .into_iter()
            .map(|e| (e.worker_id, e.currently_present))
            .collect()
    };

    let expected = presence(&records);
    assert_eq!(presence(&reversed), expected);
    assert_eq!(presence(&rotated), expected);
    assert_eq!(expected.get("a"), Some(&true));
    assert_eq!(expected.get("b"), Some(&false));
}

#[test]
fn test_cardinality_and_status_partition() {
    let records = vec![
        open(Some("a"), TODAY, "08:00:00"),
        open(Some("b"), YESTERDAY, "08:00:00"),
        closed("c", TODAY, "08:00:00", "09:00:00", 3600.0),
        RawAttendanceRecord::default(),
        RawAttendanceRecord {
            out_time: Some("10:00:00".into()),
            ..Default::default()
        },
    ];

    let events = reconcile(&records, &opts());
    assert_eq!(events.len(), records.len());

    for e in &events {
        let index: usize = e.id.trim_start_matches("evt-").parse().expect("index id");
        let has_out = records[index].out_time.is_some();
        assert_eq!(e.status == SessionStatus::Completed, has_out);
        match e.status {
            SessionStatus::Active => assert_eq!(e.duration_label, LABEL_ONGOING),
            SessionStatus::Incomplete => assert_eq!(e.duration_label, LABEL_NO_CHECKOUT),
            SessionStatus::Completed => assert!(e.duration_label.ends_with("min")),
        }
    }
}

#[test]
fn test_sorted_most_recent_first_and_stable() {
    let records = vec![
        closed("first", TODAY, "08:00:00", "09:00:00", 3600.0),
        open(Some("late"), TODAY, "11:00:00"),
        closed("second", TODAY, "08:00:00", "08:10:00", 600.0),
        open(Some("old"), YESTERDAY, "23:00:00"),
        closed("third", TODAY, "08:00:00", "08:20:00", 1200.0),
    ];

    let events = reconcile(&records, &opts());
    let order: Vec<&str> = events.iter().map(|e| e.worker_id.as_str()).collect();
    assert_eq!(order, vec!["late", "first", "second", "third", "old"]);

    for pair in events.windows(2) {
        assert!(pair[0].in_timestamp >= pair[1].in_timestamp);
    }
}

#[test]
fn test_missing_date_or_time_falls_back_to_as_of() {
    let no_date = RawAttendanceRecord {
        person_id: Some("w1".into()),
        in_time: Some("09:00:00".into()),
        ..Default::default()
    };
    let bad_time = open(Some("w2"), TODAY, "not-a-time");

    let now = as_of(TODAY, "12:00:00");
    let events = reconcile(&[no_date, bad_time], &ReconcileOptions::new(now));

    assert_eq!(events.len(), 2);
    for e in &events {
        assert_eq!(e.in_timestamp, now);
    }
    // without a date a session can never be today's
    let w1 = events.iter().find(|e| e.worker_id == "w1").expect("w1 kept");
    assert_eq!(w1.status, SessionStatus::Incomplete);
    assert!(!w1.currently_present);
    // a bad time does not hide a valid date
    let w2 = events.iter().find(|e| e.worker_id == "w2").expect("w2 kept");
    assert_eq!(w2.status, SessionStatus::Active);
    assert!(w2.currently_present);
}

#[test]
fn test_confidence_defaults() {
    let r = open(Some("w1"), TODAY, "09:00:00");

    let events = reconcile(std::slice::from_ref(&r), &opts());
    let e = &events[0];
    assert_eq!(e.confidence, 98.0);

    let custom = opts().with_default_confidence(80.0);
    assert_eq!(reconcile(&[r], &custom)[0].confidence, 80.0);
}

#[test]
fn test_display_name_and_profile_url() {
    let opts = opts().with_profile_base(Some("http://127.0.0.1:8000/".into()));
    let events = reconcile(&[open(Some("john_doe_2"), TODAY, "09:00:00")], &opts);
    let e = &events[0];

    assert_eq!(e.worker_name, "john doe 2");
    assert_eq!(
        e.profile_url,
        "http://127.0.0.1:8000/api/workers/john_doe_2/image"
    );
}

#[test]
fn test_empty_input() {
    assert!(reconcile(&[], &opts()).is_empty());
    assert!(active_workers(&[], as_of(TODAY, "00:00:00").date()).is_empty());
}

#[test]
fn test_as_of_day_decides_today() {
    let records = vec![open(Some("w1"), TODAY, "23:59:00")];

    // the same row seen the next day is stale
    let next_day = ReconcileOptions::new(as_of("2025-06-11", "00:00:30"));
    let events = reconcile(&records, &next_day);
    let e = &events[0];
    assert_eq!(e.status, SessionStatus::Incomplete);
    assert!(!e.currently_present);
}

#[test]
fn test_parse_records_is_lenient_per_row() {
    let payload = br#"[
        {"person_id": "w1", "date": "2025-06-10", "in_time": "09:00:00", "out_time": null, "confidence": 91.5},
        {"person_id": 42, "date": "2025-06-10T00:00:00", "in_time": "09:00", "out_time": "", "duration_sec": "n/a", "confidence": "88"},
        {"person_id": "", "date": 20250610, "in_time": ["x"], "duration_seconds": 60, "out_time": "10:00:00"},
        "garbage",
        null
    ]"#;

    let records = parse_records(payload).expect("array payload");
    assert_eq!(records.len(), 5);

    assert_eq!(records[0].confidence, Some(91.5));
    assert!(records[0].is_open());

    assert_eq!(records[1].person_id.as_deref(), Some("42"));
    assert_eq!(records[1].out_time, None);
    assert_eq!(records[1].duration_seconds, None);
    assert_eq!(records[1].confidence, Some(88.0));

    assert_eq!(records[2].person_id, None);
    assert_eq!(records[2].in_time, None);
    assert_eq!(records[2].duration_seconds, Some(60.0));

    assert_eq!(records[3], RawAttendanceRecord::default());
    assert_eq!(records[4], RawAttendanceRecord::default());

    let events = reconcile(&records, &opts());
    assert_eq!(events.len(), 5);
    let iso = events.iter().find(|e| e.id == "evt-1").expect("row 1 kept");
    assert_eq!(iso.in_timestamp, as_of(TODAY, "09:00:00"));
    assert!(iso.currently_present);
}

#[test]
fn test_parse_records_rejects_non_array() {
    assert!(parse_records(br#"{"detail": "boom"}"#).is_err());
    assert!(parse_records(b"not json").is_err());
    assert!(parse_records(b"[]").expect("empty array").is_empty());
}
