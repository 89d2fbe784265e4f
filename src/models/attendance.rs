use super::event_type::EventType;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One immutable attendance fact. Rows are append-only: a clock action
/// creates one, nothing ever mutates or deletes it.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "event_type")]
    pub kind: EventType, // ⇔ attendance_logs.event_type ('IN' | 'OUT')
    pub recorded_at: DateTime<Utc>,
    pub source: String,          // ⇔ attendance_logs.source ('CLI', 'QR_SCAN', ...)
    pub raw_scan: Option<String>,
    pub created_by: Option<i64>,
    pub created_at: String,      // ISO8601
}

impl AttendanceEvent {
    /// High-level constructor for events created by the clock command.
    pub fn new(
        user_id: i64,
        kind: EventType,
        recorded_at: DateTime<Utc>,
        source: Option<String>,
        raw_scan: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            kind,
            recorded_at,
            source: source.unwrap_or_else(|| "CLI".to_string()),
            raw_scan,
            // Self-service: the actor is the employee themselves.
            created_by: Some(user_id),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.recorded_at.format("%Y-%m-%d").to_string()
    }

    /// Display time at minute resolution; full precision stays in
    /// `recorded_at` for the hours arithmetic.
    pub fn time_str(&self) -> String {
        self.recorded_at.format("%H:%M").to_string()
    }
}
