//! ANSI color helper utilities for terminal output.

use crate::models::{ConfidenceLevel, SessionStatus};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// high → green, medium → yellow, low → red
pub fn color_for_confidence(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::High => GREEN,
        ConfidenceLevel::Medium => YELLOW,
        ConfidenceLevel::Low => RED,
    }
}

pub fn color_for_status(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Active => GREEN,
        SessionStatus::Completed => RESET,
        SessionStatus::Incomplete => RED,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey out placeholder values ("--:--", "-", "0 min").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "-" || v == "0 min" {
        paint(value, GREY)
    } else {
        value.to_string()
    }
}
