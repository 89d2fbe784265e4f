//! Schema migration engine. All schema creation and upgrades live here;
//! `init_db` only delegates. Applied versioned migrations are recorded as
//! `migration_applied` rows in the internal `log` table.

use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists; every other step may record into it.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn create_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            staff_id      TEXT NOT NULL UNIQUE,
            first_name    TEXT NOT NULL,
            last_name     TEXT NOT NULL,
            password      TEXT NOT NULL,
            role_id       INTEGER NOT NULL DEFAULT 1,
            department_id INTEGER,
            created_at    TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_logs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER NOT NULL,
            event_type  TEXT NOT NULL CHECK(event_type IN ('IN','OUT')),
            recorded_at TEXT NOT NULL,
            source      TEXT NOT NULL DEFAULT 'CLI',
            created_by  INTEGER,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_user_time
            ON attendance_logs(user_id, recorded_at);
        CREATE INDEX IF NOT EXISTS idx_attendance_time
            ON attendance_logs(recorded_at);
        "#,
    )?;
    Ok(())
}

fn create_leave_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS leave_requests (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      INTEGER NOT NULL,
            from_date    TEXT NOT NULL,
            to_date      TEXT NOT NULL,
            reason       TEXT NOT NULL,
            status       TEXT NOT NULL DEFAULT 'PENDING'
                         CHECK(status IN ('PENDING','APPROVED','REJECTED')),
            submitted_at TEXT NOT NULL,
            approved_by  INTEGER,
            approved_at  TEXT,
            updated_at   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_shift_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            description TEXT NOT NULL,
            assigned_to INTEGER,
            status      TEXT NOT NULL DEFAULT 'AVAILABLE'
                        CHECK(status IN ('AVAILABLE','ASSIGNED','COMPLETED','CANCELLED')),
            created_by  INTEGER,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS shift_requests (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      INTEGER NOT NULL,
            shift_id     INTEGER NOT NULL,
            request_type TEXT NOT NULL
                         CHECK(request_type IN ('TRADE','PICK_UP','DROP')),
            note         TEXT,
            status       TEXT NOT NULL DEFAULT 'PENDING'
                         CHECK(status IN ('PENDING','APPROVED','REJECTED')),
            origin       TEXT NOT NULL
                         CHECK(origin IN ('ASSIGNED','AVAILABLE')),
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL,
            approved_by  INTEGER,
            approved_at  TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Add the raw scan column to attendance_logs (badge/QR ingestion).
fn migrate_add_raw_scan_column(conn: &Connection) -> Result<(), Error> {
    let version = "20260115_0002_add_raw_scan";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !column_exists(conn, "attendance_logs", "raw_scan")? {
        conn.execute(
            "ALTER TABLE attendance_logs ADD COLUMN raw_scan TEXT;",
            [],
        )?;
        success(format!(
            "Migration applied: {} → added 'raw_scan' to attendance_logs",
            version
        ));
    }

    mark_applied(conn, version, "Added raw_scan column to attendance_logs")?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base schema (idempotent)
    let fresh = !table_exists(conn, "attendance_logs")?;

    create_users_table(conn)?;
    create_attendance_table(conn)?;
    create_leave_table(conn)?;
    create_shift_tables(conn)?;

    if fresh {
        success("Created base schema (users, attendance_logs, leave_requests, shifts, shift_requests).");
    }

    // 3) Versioned column migrations
    migrate_add_raw_scan_column(conn)?;

    Ok(())
}
