//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width, ignoring ANSI escape sequences.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_width(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // skip until the terminating 'm' of an SGR sequence
            for n in chars.by_ref() {
                if n == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// `"8.0 min"` style label for a closed session.
pub fn minutes_label(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) if s != 0.0 => format!("{:.1} min", s / 60.0),
        _ => "0 min".to_string(),
    }
}

/// `"2h 05m"` style total.
pub fn secs2readable(seconds: f64) -> String {
    let total = seconds.max(0.0) as i64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    format!("{}h {:02}m", hours, minutes)
}

/// Worker ids use underscores where the display name has spaces.
pub fn display_name(worker_id: &str) -> String {
    worker_id.replace('_', " ")
}
