//! Internal audit trail. Mutating commands append one line each into the
//! `log` table; the migration engine records applied versions there too.

use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{Connection, params};

pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
        params![Utc::now().to_rfc3339(), operation, target, message],
    )?;
    Ok(())
}
