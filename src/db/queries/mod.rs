pub mod attendance;
pub mod leave;
pub mod shift_requests;
pub mod shifts;
pub mod users;

use crate::errors::AppError;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Timestamps are stored as UTC TEXT in `%Y-%m-%d %H:%M:%S`; lexicographic
/// order matches chronological order, which the engine relies on.
pub(crate) fn ts_to_db(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub(crate) fn ts_from_db(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(s.to_string())),
            )
        })
}
