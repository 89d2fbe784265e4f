use crate::errors::{AppError, AppResult};
use crate::models::leave::ReviewStatus;
use crate::models::shift_request::{
    ShiftOrigin, ShiftRequest, ShiftRequestType, ShiftRequestWithNames,
};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const COLUMNS: &str = "id, user_id, shift_id, request_type, note, status, origin, created_at, updated_at, approved_by, approved_at";

fn bad_text(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<ShiftRequest> {
    let type_str: String = row.get("request_type")?;
    let status_str: String = row.get("status")?;
    let origin_str: String = row.get("origin")?;

    let request_type = ShiftRequestType::from_db_str(&type_str)
        .ok_or_else(|| bad_text(AppError::InvalidRequestType(type_str.clone())))?;
    let status = ReviewStatus::from_db_str(&status_str)
        .ok_or_else(|| bad_text(AppError::InvalidStatus(status_str.clone())))?;
    let origin = ShiftOrigin::from_db_str(&origin_str)
        .ok_or_else(|| bad_text(AppError::InvalidStatus(origin_str.clone())))?;

    Ok(ShiftRequest {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        shift_id: row.get("shift_id")?,
        request_type,
        note: row.get("note")?,
        status,
        origin,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        approved_by: row.get("approved_by")?,
        approved_at: row.get("approved_at")?,
    })
}

fn map_with_names(row: &Row) -> Result<ShiftRequestWithNames> {
    let request = map_row(row)?;
    let first: String = row.get("employee_first_name")?;
    let last: String = row.get("employee_last_name")?;
    let app_first: Option<String> = row.get("approver_first_name")?;
    let app_last: Option<String> = row.get("approver_last_name")?;

    Ok(ShiftRequestWithNames {
        request,
        employee: format!("{} {}", first, last),
        approver: match (app_first, app_last) {
            (Some(f), Some(l)) => Some(format!("{} {}", f, l)),
            _ => None,
        },
    })
}

/// Submit a new shift request; always starts PENDING.
pub fn insert_request(
    conn: &Connection,
    user_id: i64,
    shift_id: i64,
    request_type: ShiftRequestType,
    note: Option<&str>,
    origin: ShiftOrigin,
) -> AppResult<ShiftRequest> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO shift_requests
            (user_id, shift_id, request_type, note, status, origin, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, 'PENDING', ?5, ?6, ?6)",
        params![
            user_id,
            shift_id,
            request_type.to_db_str(),
            note,
            origin.to_db_str(),
            now,
        ],
    )?;

    let id = conn.last_insert_rowid();
    find_by_id(conn, id)?.ok_or_else(|| AppError::NotFound("Shift request".into()))
}

pub fn find_by_id(conn: &Connection, id: i64) -> AppResult<Option<ShiftRequest>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM shift_requests WHERE id = ?1 LIMIT 1"
    ))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn load_by_user(conn: &Connection, user_id: i64) -> AppResult<Vec<ShiftRequest>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM shift_requests
         WHERE user_id = ?1
         ORDER BY created_at DESC, id DESC"
    ))?;

    let rows = stmt.query_map([user_id], map_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_with_names(conn: &Connection) -> AppResult<Vec<ShiftRequestWithNames>> {
    let mut stmt = conn.prepare(
        "SELECT sr.id, sr.user_id, sr.shift_id, sr.request_type, sr.note, sr.status,
                sr.origin, sr.created_at, sr.updated_at, sr.approved_by, sr.approved_at,
                u.first_name  AS employee_first_name,
                u.last_name   AS employee_last_name,
                au.first_name AS approver_first_name,
                au.last_name  AS approver_last_name
         FROM shift_requests sr
         JOIN users u ON u.id = sr.user_id
         LEFT JOIN users au ON au.id = sr.approved_by
         ORDER BY sr.created_at DESC, sr.id DESC",
    )?;

    let rows = stmt.query_map([], map_with_names)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// HR decision, same lifecycle as leave requests. `None` on unknown id.
pub fn update_status(
    conn: &Connection,
    request_id: i64,
    status: ReviewStatus,
    approver_id: Option<i64>,
) -> AppResult<Option<ShiftRequest>> {
    let now = Utc::now().to_rfc3339();

    let affected = if status.needs_approver() {
        conn.execute(
            "UPDATE shift_requests
             SET status = ?1, approved_by = ?2, approved_at = ?3, updated_at = ?3
             WHERE id = ?4",
            params![status.to_db_str(), approver_id, now, request_id],
        )?
    } else {
        conn.execute(
            "UPDATE shift_requests
             SET status = ?1, approved_by = NULL, approved_at = NULL, updated_at = ?2
             WHERE id = ?3",
            params![status.to_db_str(), now, request_id],
        )?
    };

    if affected == 0 {
        return Ok(None);
    }
    find_by_id(conn, request_id)
}
