use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            let pool = DbPool::new(&cfg.database)?;

            let mut stmt = pool.conn.prepare(
                "SELECT date, operation, target, message
                 FROM log
                 ORDER BY id DESC",
            )?;

            let rows = stmt.query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?;

            header("Internal log");
            for r in rows {
                let (date, operation, target, message) = r?;
                println!("{}  [{}] {}  {}", date, operation, target, message);
            }
        }
    }

    Ok(())
}
