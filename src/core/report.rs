//! Output contract of the hours endpoint: the ledger rendered with lossy
//! minute-resolution display times and totals rounded to 2 decimals.

use crate::core::reconcile::Ledger;
use crate::utils::time::hhmm;
use chrono::NaiveDate;
use serde::Serialize;

/// Round at the output boundary only, never mid-accumulation.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub date: String,       // "YYYY-MM-DD"
    pub clock_in: String,   // "HH:MM" or "--:--"
    pub clock_out: String,  // "HH:MM" or "-"
    pub total_hours: f64,
    pub incomplete: bool,
}

/// Scalar period total for one employee, the answer to "how many paired
/// hours between these dates".
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotal {
    pub employee_id: i64,
    pub start_date: String, // "YYYY-MM-DD", inclusive
    pub end_date: String,   // "YYYY-MM-DD", inclusive
    pub total_hours: f64,
}

impl PeriodTotal {
    pub fn build(employee_id: i64, start: NaiveDate, end: NaiveDate, hours: f64) -> Self {
        Self {
            employee_id,
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            total_hours: round2(hours),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHoursReport {
    pub employee_id: i64,
    pub weekly_total: f64,
    pub days: Vec<DayEntry>,
}

impl WorkHoursReport {
    pub fn build(employee_id: i64, ledger: &Ledger) -> Self {
        let days = ledger
            .days
            .iter()
            .map(|d| DayEntry {
                date: d.date.format("%Y-%m-%d").to_string(),
                clock_in: d
                    .clock_in
                    .map(hhmm)
                    .unwrap_or_else(|| "--:--".to_string()),
                clock_out: d
                    .clock_out
                    .map(hhmm)
                    .unwrap_or_else(|| "-".to_string()),
                total_hours: round2(d.total_hours),
                incomplete: d.incomplete,
            })
            .collect();

        Self {
            employee_id,
            weekly_total: round2(ledger.weekly_total),
            days,
        }
    }
}
