//! Time utilities: timestamp parsing for the clock command, HH:MM display.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};

/// Parse a backfill timestamp. Accepted forms (interpreted as UTC):
/// "YYYY-MM-DD HH:MM", "YYYY-MM-DDTHH:MM", optionally with ":SS".
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];

    for fmt in FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }

    Err(AppError::InvalidTimestamp(s.to_string()))
}

/// Minute-resolution display; intentionally lossy for the ledger view.
pub fn hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
