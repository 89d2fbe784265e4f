use crate::errors::{AppError, AppResult};
use crate::models::shift::{Shift, ShiftStatus};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const COLUMNS: &str = "id, description, assigned_to, status, created_by, created_at, updated_at";

pub fn map_row(row: &Row) -> Result<Shift> {
    let status_str: String = row.get("status")?;
    let status = ShiftStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Shift {
        id: row.get("id")?,
        description: row.get("description")?,
        assigned_to: row.get("assigned_to")?,
        status,
        created_by: row.get("created_by")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn insert_shift(
    conn: &Connection,
    description: &str,
    assigned_to: Option<i64>,
    status: ShiftStatus,
    created_by: Option<i64>,
) -> AppResult<Shift> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO shifts (description, assigned_to, status, created_by, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        params![description, assigned_to, status.to_db_str(), created_by, now],
    )?;

    let id = conn.last_insert_rowid();
    find_by_id(conn, id)?.ok_or_else(|| AppError::NotFound("Shift".into()))
}

pub fn find_by_id(conn: &Connection, id: i64) -> AppResult<Option<Shift>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM shifts WHERE id = ?1 LIMIT 1"
    ))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn load_for_user(conn: &Connection, user_id: i64) -> AppResult<Vec<Shift>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM shifts
         WHERE assigned_to = ?1
         ORDER BY created_at DESC"
    ))?;

    let rows = stmt.query_map([user_id], map_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Open pool: status AVAILABLE and not assigned to anyone.
pub fn load_available(conn: &Connection) -> AppResult<Vec<Shift>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM shifts
         WHERE status = 'AVAILABLE' AND assigned_to IS NULL
         ORDER BY created_at DESC"
    ))?;

    let rows = stmt.query_map([], map_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<Shift>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM shifts ORDER BY created_at DESC"
    ))?;

    let rows = stmt.query_map([], map_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Update status and assignee together. Returns `None` on unknown id.
pub fn update_status(
    conn: &Connection,
    shift_id: i64,
    status: ShiftStatus,
    assigned_to: Option<i64>,
) -> AppResult<Option<Shift>> {
    let now = Utc::now().to_rfc3339();
    let affected = conn.execute(
        "UPDATE shifts
         SET assigned_to = ?1, status = ?2, updated_at = ?3
         WHERE id = ?4",
        params![assigned_to, status.to_db_str(), now, shift_id],
    )?;

    if affected == 0 {
        return Ok(None);
    }
    find_by_id(conn, shift_id)
}

pub fn delete_shift(conn: &Connection, shift_id: i64) -> AppResult<bool> {
    let affected = conn.execute("DELETE FROM shifts WHERE id = ?1", [shift_id])?;
    Ok(affected > 0)
}
