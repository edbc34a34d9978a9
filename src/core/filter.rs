use crate::models::{AttendanceEvent, ConfidenceLevel, SessionStatus};
use chrono::{Duration, Months, NaiveDateTime};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateRange {
    /// Earliest `in_timestamp` kept for this range, relative to `now`.
    pub fn cutoff(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            DateRange::All => None,
            DateRange::Today => now.date().and_hms_opt(0, 0, 0),
            DateRange::Week => Some(now - Duration::days(7)),
            DateRange::Month => now.checked_sub_months(Months::new(1)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfidenceFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl ConfidenceFilter {
    pub fn accepts(&self, level: ConfidenceLevel) -> bool {
        match self {
            ConfidenceFilter::All => true,
            ConfidenceFilter::Low => level == ConfidenceLevel::Low,
            ConfidenceFilter::Medium => level == ConfidenceLevel::Medium,
            ConfidenceFilter::High => level == ConfidenceLevel::High,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
    Incomplete,
}

impl StatusFilter {
    pub fn accepts(&self, status: SessionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == SessionStatus::Active,
            StatusFilter::Completed => status == SessionStatus::Completed,
            StatusFilter::Incomplete => status == SessionStatus::Incomplete,
        }
    }
}

/// Client-side view filter over reconciled events.
#[derive(Clone, Debug, Default)]
pub struct EventFilter {
    pub search: Option<String>,
    pub range: DateRange,
    pub confidence: ConfidenceFilter,
    pub status: StatusFilter,
    pub present_only: bool,
}

impl EventFilter {
    pub fn matches(&self, event: &AttendanceEvent, cutoff: Option<NaiveDateTime>) -> bool {
        if let Some(q) = self.search.as_deref().map(str::trim).filter(|q| !q.is_empty())
            && !event
                .worker_name
                .to_lowercase()
                .contains(&q.to_lowercase())
        {
            return false;
        }

        if let Some(c) = cutoff
            && event.in_timestamp < c
        {
            return false;
        }

        self.confidence.accepts(event.confidence_level())
            && self.status.accepts(event.status)
            && (!self.present_only || event.currently_present)
    }

    /// Keep matching events, preserving order.
    pub fn apply<'a>(
        &self,
        events: &'a [AttendanceEvent],
        now: NaiveDateTime,
    ) -> Vec<&'a AttendanceEvent> {
        let cutoff = self.range.cutoff(now);
        events.iter().filter(|e| self.matches(e, cutoff)).collect()
    }
}
