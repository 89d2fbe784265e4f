use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::attendance::load_events_between;
use crate::db::audit;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ensure_writable, write_csv, write_json};
use crate::utils::date::period_bounds;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        user,
        range,
        force,
    } = cmd
    {
        let (start, end) = period_bounds(range.as_deref().unwrap_or("all"))?;
        ensure_writable(file, *force)?;

        let pool = DbPool::new(&cfg.database)?;
        let events = load_events_between(&pool.conn, *user, start, end)?;

        match format {
            ExportFormat::Csv => write_csv(file, &events)?,
            ExportFormat::Json => write_json(file, &events)?,
        }

        audit(
            &pool.conn,
            "export",
            file,
            &format!(
                "{} event(s) exported as {} ({} to {})",
                events.len(),
                format.as_str(),
                start,
                end
            ),
        )?;
    }

    Ok(())
}
