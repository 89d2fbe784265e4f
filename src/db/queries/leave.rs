use crate::errors::{AppError, AppResult};
use crate::models::leave::{LeaveRequest, LeaveWithNames, ReviewStatus};
use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const COLUMNS: &str =
    "id, user_id, from_date, to_date, reason, status, submitted_at, approved_by, approved_at, updated_at";

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<LeaveRequest> {
    let from_str: String = row.get("from_date")?;
    let to_str: String = row.get("to_date")?;
    let status_str: String = row.get("status")?;

    let status = ReviewStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(LeaveRequest {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        from_date: parse_date(&from_str)?,
        to_date: parse_date(&to_str)?,
        reason: row.get("reason")?,
        status,
        submitted_at: row.get("submitted_at")?,
        approved_by: row.get("approved_by")?,
        approved_at: row.get("approved_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn map_with_names(row: &Row) -> Result<LeaveWithNames> {
    let request = map_row(row)?;
    let first: String = row.get("employee_first_name")?;
    let last: String = row.get("employee_last_name")?;
    let app_first: Option<String> = row.get("approver_first_name")?;
    let app_last: Option<String> = row.get("approver_last_name")?;

    Ok(LeaveWithNames {
        request,
        employee: format!("{} {}", first, last),
        approver: match (app_first, app_last) {
            (Some(f), Some(l)) => Some(format!("{} {}", f, l)),
            _ => None,
        },
    })
}

/// Submit a new leave request; always starts PENDING.
pub fn insert_leave(
    conn: &Connection,
    user_id: i64,
    from_date: NaiveDate,
    to_date: NaiveDate,
    reason: &str,
) -> AppResult<LeaveRequest> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO leave_requests (user_id, from_date, to_date, reason, status, submitted_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, 'PENDING', ?5, ?5)",
        params![
            user_id,
            from_date.format("%Y-%m-%d").to_string(),
            to_date.format("%Y-%m-%d").to_string(),
            reason,
            now,
        ],
    )?;

    let id = conn.last_insert_rowid();
    find_by_id(conn, id)?.ok_or_else(|| AppError::NotFound("Leave request".into()))
}

pub fn find_by_id(conn: &Connection, id: i64) -> AppResult<Option<LeaveRequest>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM leave_requests WHERE id = ?1 LIMIT 1"
    ))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn load_by_user(conn: &Connection, user_id: i64) -> AppResult<Vec<LeaveRequest>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM leave_requests
         WHERE user_id = ?1
         ORDER BY submitted_at DESC, id DESC"
    ))?;

    let rows = stmt.query_map([user_id], map_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// HR listing, joined with employee and approver names, optionally
/// filtered by status.
pub fn load_with_names(
    conn: &Connection,
    status: Option<ReviewStatus>,
) -> AppResult<Vec<LeaveWithNames>> {
    let mut sql = String::from(
        "SELECT lr.id, lr.user_id, lr.from_date, lr.to_date, lr.reason, lr.status,
                lr.submitted_at, lr.approved_by, lr.approved_at, lr.updated_at,
                u.first_name  AS employee_first_name,
                u.last_name   AS employee_last_name,
                au.first_name AS approver_first_name,
                au.last_name  AS approver_last_name
         FROM leave_requests lr
         JOIN users u ON u.id = lr.user_id
         LEFT JOIN users au ON au.id = lr.approved_by",
    );
    if status.is_some() {
        sql.push_str(" WHERE lr.status = ?1");
    }
    sql.push_str(" ORDER BY lr.submitted_at DESC, lr.id DESC");

    let mut stmt = conn.prepare(&sql)?;

    let mut out = Vec::new();
    match status {
        Some(s) => {
            let rows = stmt.query_map([s.to_db_str()], map_with_names)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let rows = stmt.query_map([], map_with_names)?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

/// HR decision. APPROVED/REJECTED stamp the approver, PENDING clears it.
/// Returns `None` when the request id does not exist (no state change).
pub fn update_status(
    conn: &Connection,
    leave_id: i64,
    status: ReviewStatus,
    approver_id: Option<i64>,
) -> AppResult<Option<LeaveRequest>> {
    let now = Utc::now().to_rfc3339();

    let affected = if status.needs_approver() {
        conn.execute(
            "UPDATE leave_requests
             SET status = ?1, approved_by = ?2, approved_at = ?3, updated_at = ?3
             WHERE id = ?4",
            params![status.to_db_str(), approver_id, now, leave_id],
        )?
    } else {
        conn.execute(
            "UPDATE leave_requests
             SET status = ?1, approved_by = NULL, approved_at = NULL, updated_at = ?2
             WHERE id = ?3",
            params![status.to_db_str(), now, leave_id],
        )?
    };

    if affected == 0 {
        return Ok(None);
    }
    find_by_id(conn, leave_id)
}
