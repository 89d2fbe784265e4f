use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::attendance::insert_event;
use crate::db::audit;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceEvent;
use crate::models::event_type::EventType;
use crate::ui::messages::success;
use crate::utils::time::parse_timestamp;
use chrono::Utc;

/// Ingest one clock event. Validation mirrors the request contract:
/// user and action are required, the action token is normalized
/// case-insensitively and must resolve to IN or OUT, otherwise the
/// command is rejected and nothing is persisted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        user,
        action,
        source,
        raw,
        at,
    } = cmd
    {
        let user_id = user
            .ok_or_else(|| AppError::Validation("user and action are required".into()))?;

        let action = action
            .as_deref()
            .ok_or_else(|| AppError::Validation("user and action are required".into()))?;

        let kind = EventType::parse(action)
            .ok_or_else(|| AppError::Validation("action must be 'in' or 'out'".into()))?;

        let recorded_at = match at {
            Some(ts) => parse_timestamp(ts)?,
            None => Utc::now(),
        };

        let ev = AttendanceEvent::new(
            user_id,
            kind,
            recorded_at,
            source
                .clone()
                .or_else(|| Some(cfg.default_source.clone())),
            raw.clone(),
        );

        let pool = DbPool::new(&cfg.database)?;
        let id = insert_event(&pool.conn, &ev)?;

        audit(
            &pool.conn,
            "clock",
            &user_id.to_string(),
            &format!("{} at {} (id {})", kind.to_db_str(), ev.date_str(), id),
        )?;

        success(format!(
            "Clock-{} recorded for employee {} at {} {} (id {})",
            match kind {
                EventType::In => "in",
                EventType::Out => "out",
            },
            user_id,
            ev.date_str(),
            ev.time_str(),
            id
        ));
    }

    Ok(())
}
