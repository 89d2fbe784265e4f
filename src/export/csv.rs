use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceEvent;
use csv::Writer;
use std::path::Path;

/// Write attendance events as CSV.
pub fn write_csv(path: &str, events: &[AttendanceEvent]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(["id", "user_id", "event_type", "recorded_at", "source", "raw_scan"])
        .map_err(|e| AppError::Export(e.to_string()))?;

    for ev in events {
        wtr.write_record(&[
            ev.id.to_string(),
            ev.user_id.to_string(),
            ev.kind.to_db_str().to_string(),
            ev.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ev.source.clone(),
            ev.raw_scan.clone().unwrap_or_default(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    super::notify_export_success("CSV", Path::new(path));
    Ok(())
}
