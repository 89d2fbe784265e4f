use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceEvent;
use std::path::Path;

/// Write attendance events as pretty-printed JSON.
pub fn write_json(path: &str, events: &[AttendanceEvent]) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(events).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    super::notify_export_success("JSON", Path::new(path));
    Ok(())
}
