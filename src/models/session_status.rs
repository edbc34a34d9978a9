use serde::Serialize;
use std::fmt;

/// Classification of one presence session.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Open session dated today.
    Active,
    /// Session with a recorded out-time.
    Completed,
    /// Open session dated before today (never checked out).
    Incomplete,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "Active",
            SessionStatus::Completed => "Completed",
            SessionStatus::Incomplete => "Incomplete",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, SessionStatus::Completed)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
