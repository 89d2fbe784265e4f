use chrono::{NaiveDate, NaiveTime};

/// Derived per-day ledger entry. Recomputed on every request from the raw
/// event log, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// First IN of the day; display value, not overwritten by later INs.
    pub clock_in: Option<NaiveTime>,
    /// OUT of the last matched pair of the day.
    pub clock_out: Option<NaiveTime>,
    /// Sum of matched IN→OUT durations, float hours. Unmatched INs add 0.
    pub total_hours: f64,
    /// True when at least one IN of the day has no matching OUT.
    pub incomplete: bool,
}

impl DaySummary {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            clock_in: None,
            clock_out: None,
            total_hours: 0.0,
            incomplete: false,
        }
    }
}
