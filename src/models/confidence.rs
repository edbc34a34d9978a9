use serde::Serialize;

pub const HIGH_THRESHOLD: f64 = 90.0;
pub const MEDIUM_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Bucket a 0-100 recognition score.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            ConfidenceLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}
