use crate::errors::AppResult;
use crate::models::user::{ROLE_STAFF, User};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get("id")?,
        staff_id: row.get("staff_id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        password: row.get("password")?,
        role_id: row.get("role_id")?,
        department_id: row.get("department_id")?,
    })
}

pub fn insert_user(
    conn: &Connection,
    staff_id: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
    role_id: i64,
    department_id: Option<i64>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (staff_id, first_name, last_name, password, role_id, department_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            staff_id,
            first_name,
            last_name,
            password,
            role_id,
            department_id,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Lookup by the login code (the `staff_id` column), used by the login stub.
pub fn find_by_staff_id(conn: &Connection, staff_id: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare(
        "SELECT id, staff_id, first_name, last_name, password, role_id, department_id
         FROM users
         WHERE staff_id = ?1
         LIMIT 1",
    )?;
    let user = stmt.query_row([staff_id], map_row).optional()?;
    Ok(user)
}

pub fn find_by_id(conn: &Connection, id: i64) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare(
        "SELECT id, staff_id, first_name, last_name, password, role_id, department_id
         FROM users
         WHERE id = ?1
         LIMIT 1",
    )?;
    let user = stmt.query_row([id], map_row).optional()?;
    Ok(user)
}

/// Non-HR employees, ordered by name — the HR dropdown listing.
pub fn list_employees(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare(
        "SELECT id, staff_id, first_name, last_name, password, role_id, department_id
         FROM users
         WHERE role_id = ?1
         ORDER BY first_name, last_name, staff_id",
    )?;

    let rows = stmt.query_map([ROLE_STAFF], map_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
