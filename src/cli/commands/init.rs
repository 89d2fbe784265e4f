use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command: config file + database schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    // init_all resolves a relative --db into the config directory; open
    // that resolved path, not the raw flag value.
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = &cfg.database;

    let conn = Connection::open(db_path)?;
    db::init_db(&conn)?;

    success(format!("Database initialized at {}", db_path));

    if let Err(e) = db::audit(
        &conn,
        "init",
        "database",
        &format!("Database initialized at {}", db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(())
}
