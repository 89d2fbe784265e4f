//! Database bootstrap used by `kronos init`.

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring a (possibly empty) database file up to the current schema.
/// Foreign keys are enforced per connection, so enable them before any
/// table exists.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.pragma_update(None, "foreign_keys", true)?;
    run_pending_migrations(conn)?;
    Ok(())
}
