//! Formatting utilities used for CLI and export outputs.

/// Fixed two-decimal rendering for hour totals in tables and CSV.
pub fn fmt_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
