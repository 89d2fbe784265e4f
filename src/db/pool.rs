//! SQLite connection handle, opened once per command invocation.

use rusqlite::{Connection, Result};
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database file. The busy timeout covers parallel test
    /// processes briefly contending for the same file.
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_millis(500))?;
        Ok(Self { conn })
    }
}
