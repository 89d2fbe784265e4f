//! Date utilities: parsing YYYY-MM-DD and period/range expressions.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn month_bounds(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month start");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid next month");
    (first, next.checked_sub_days(Days::new(1)).expect("valid month end"))
}

fn year_bounds(year: i32) -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(year, 1, 1).expect("valid year start"),
        NaiveDate::from_ymd_opt(year, 12, 31).expect("valid year end"),
    )
}

/// Single period (YYYY, YYYY-MM or YYYY-MM-DD) → inclusive date bounds.
fn single_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d") {
        return Ok(month_bounds(first.year(), first.month()));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        return Ok(year_bounds(year));
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

/// Parse a period expression into inclusive `(start, end)` bounds.
///
/// Supported: "all", a single period (YYYY / YYYY-MM / YYYY-MM-DD), or a
/// "start:end" range of periods.
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if p.eq_ignore_ascii_case("all") {
        return Ok((
            NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid epoch"),
            NaiveDate::from_ymd_opt(9999, 12, 31).expect("valid sentinel"),
        ));
    }

    if let Some((start, end)) = p.split_once(':') {
        let (s, _) = single_bounds(start)?;
        let (_, e) = single_bounds(end)?;
        if s > e {
            return Err(AppError::InvalidPeriod(p.to_string()));
        }
        return Ok((s, e));
    }

    single_bounds(p)
}
