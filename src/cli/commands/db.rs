use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::{check_integrity, print_db_info};
use crate::errors::AppResult;
use crate::ui::messages::{error, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations are up to date.");
        }

        if *check {
            if check_integrity(&mut pool)? {
                success("Database integrity: ok");
            } else {
                error("Database integrity check FAILED");
            }
        }

        if *info {
            print_db_info(&mut pool, &cfg.database)?;
        }
    }

    Ok(())
}
