use super::{ts_from_db, ts_to_db};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceEvent;
use crate::models::event_type::EventType;
use chrono::{Duration, NaiveDate, Utc};
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<AttendanceEvent> {
    let kind_str: String = row.get("event_type")?;
    let kind = EventType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventType(kind_str.clone())),
        )
    })?;

    let recorded_str: String = row.get("recorded_at")?;

    Ok(AttendanceEvent {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind,
        recorded_at: ts_from_db(&recorded_str)?,
        source: row.get("source")?,
        raw_scan: row.get("raw_scan")?,
        created_by: row.get("created_by")?,
        created_at: row.get("created_at")?,
    })
}

/// Append one attendance fact. Returns the new row id.
pub fn insert_event(conn: &Connection, ev: &AttendanceEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attendance_logs
            (user_id, event_type, recorded_at, source, raw_scan, created_by, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ev.user_id,
            ev.kind.to_db_str(),
            ts_to_db(ev.recorded_at),
            ev.source,
            ev.raw_scan,
            ev.created_by,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Filters for the per-employee listing. `date` wins over `days`;
/// both `None` means the full history.
#[derive(Debug, Default, Clone, Copy)]
pub struct EventFilter {
    pub days: Option<i64>,
    pub date: Option<NaiveDate>,
}

/// Load one employee's events, ascending by `recorded_at` — the ordering
/// contract the reconciliation engine assumes.
pub fn load_user_events(
    pool: &mut DbPool,
    user_id: i64,
    filter: EventFilter,
) -> AppResult<Vec<AttendanceEvent>> {
    let mut sql = String::from(
        "SELECT id, user_id, event_type, recorded_at, source, raw_scan, created_by, created_at
         FROM attendance_logs
         WHERE user_id = ?1",
    );
    let mut bound: Vec<String> = Vec::new();

    if let Some(date) = filter.date {
        sql.push_str(" AND date(recorded_at) = ?2");
        bound.push(date.format("%Y-%m-%d").to_string());
    } else if let Some(days) = filter.days {
        sql.push_str(" AND recorded_at >= ?2");
        bound.push(ts_to_db(Utc::now() - Duration::days(days)));
    }

    sql.push_str(" ORDER BY recorded_at ASC");

    let mut stmt = pool.conn.prepare(&sql)?;

    let mut out = Vec::new();
    match bound.first() {
        Some(extra) => {
            let rows = stmt.query_map(params![user_id, extra], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let rows = stmt.query_map(params![user_id], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

/// HR overview: recent events across all employees, joined with names,
/// ordered by `(user_id, recorded_at)` so the per-employee pairing cursor
/// of the multi-employee scan sees each stream contiguously.
pub fn load_recent_events(
    conn: &Connection,
    days: Option<i64>,
    limit: i64,
) -> AppResult<Vec<(AttendanceEvent, String)>> {
    let mut sql = String::from(
        "SELECT al.id, al.user_id, al.event_type, al.recorded_at, al.source,
                al.raw_scan, al.created_by, al.created_at,
                u.first_name, u.last_name
         FROM attendance_logs al
         JOIN users u ON u.id = al.user_id",
    );
    let mut bound: Vec<String> = Vec::new();

    if let Some(days) = days {
        sql.push_str(" WHERE al.recorded_at >= ?2");
        bound.push(ts_to_db(Utc::now() - Duration::days(days)));
    }

    sql.push_str(" ORDER BY al.user_id, al.recorded_at ASC LIMIT ?1");

    let mut stmt = conn.prepare(&sql)?;

    let map = |row: &Row| -> Result<(AttendanceEvent, String)> {
        let ev = map_row(row)?;
        let first: String = row.get("first_name")?;
        let last: String = row.get("last_name")?;
        Ok((ev, format!("{} {}", first, last)))
    };

    let mut out = Vec::new();
    match bound.first() {
        Some(extra) => {
            let rows = stmt.query_map(params![limit, extra], map)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let rows = stmt.query_map(params![limit], map)?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

/// All events ordered by `(user_id, recorded_at)`, for the HR-wide hours
/// report (multi-employee reconciliation variant).
pub fn load_all_events(conn: &Connection) -> AppResult<Vec<AttendanceEvent>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, event_type, recorded_at, source, raw_scan, created_by, created_at
         FROM attendance_logs
         ORDER BY user_id, recorded_at ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Events within an inclusive date range, optionally one employee only.
/// Used by the export command.
pub fn load_events_between(
    conn: &Connection,
    user_id: Option<i64>,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<AttendanceEvent>> {
    let start_s = start.format("%Y-%m-%d").to_string();
    let end_s = end.format("%Y-%m-%d").to_string();

    let mut out = Vec::new();
    match user_id {
        Some(uid) => {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, event_type, recorded_at, source, raw_scan, created_by, created_at
                 FROM attendance_logs
                 WHERE user_id = ?1 AND date(recorded_at) BETWEEN ?2 AND ?3
                 ORDER BY user_id, recorded_at ASC",
            )?;
            let rows = stmt.query_map(params![uid, start_s, end_s], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, event_type, recorded_at, source, raw_scan, created_by, created_at
                 FROM attendance_logs
                 WHERE date(recorded_at) BETWEEN ?1 AND ?2
                 ORDER BY user_id, recorded_at ASC",
            )?;
            let rows = stmt.query_map(params![start_s, end_s], map_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    Ok(out)
}
