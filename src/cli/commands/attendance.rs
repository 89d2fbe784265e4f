use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconcile::annotate_hours;
use crate::db::pool::DbPool;
use crate::db::queries::attendance::{EventFilter, load_recent_events, load_user_events};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceEvent;
use crate::utils::date::parse_date;
use crate::utils::formatting::fmt_hours;
use crate::utils::table::{Column, Table};

const DEFAULT_WINDOW_DAYS: i64 = 7;
const DEFAULT_RECENT_LIMIT: i64 = 100;

/// Attendance listings: one employee's history, or the HR-wide recent feed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Attendance {
        user,
        days,
        date,
        all,
        recent,
        limit,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *recent {
            let window = if *all { None } else { Some(days.unwrap_or(DEFAULT_WINDOW_DAYS)) };
            let rows = load_recent_events(
                &pool.conn,
                window,
                limit.unwrap_or(DEFAULT_RECENT_LIMIT),
            )?;

            let events: Vec<AttendanceEvent> =
                rows.iter().map(|(ev, _)| ev.clone()).collect();
            let hours = annotate_hours(&events);

            let mut table = Table::new(
                vec![
                    Column::new("ID", 6),
                    Column::new("EMPLOYEE", 24),
                    Column::new("TYPE", 5),
                    Column::new("RECORDED AT", 20),
                    Column::new("SOURCE", 8),
                    Column::new("HOURS", 7),
                ],
                &cfg.separator_char,
            );

            // Newest first for display; the annotation pass needed the
            // chronological order the query returned.
            for ((ev, name), h) in rows.iter().zip(hours.iter()).rev() {
                table.add_row(vec![
                    ev.id.to_string(),
                    name.clone(),
                    ev.kind.to_db_str().to_string(),
                    format!("{} {}", ev.date_str(), ev.time_str()),
                    ev.source.clone(),
                    h.map(fmt_hours).unwrap_or_else(|| "-".to_string()),
                ]);
            }

            print!("{}", table.render());
            println!("{} event(s)", rows.len());
            return Ok(());
        }

        let user_id =
            user.ok_or_else(|| AppError::Validation("user is required".into()))?;

        let filter = if *all {
            EventFilter::default()
        } else if let Some(d) = date {
            EventFilter {
                days: None,
                date: Some(
                    parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
                ),
            }
        } else {
            EventFilter {
                days: Some(days.unwrap_or(DEFAULT_WINDOW_DAYS)),
                date: None,
            }
        };

        let events = load_user_events(&mut pool, user_id, filter)?;
        let hours = annotate_hours(&events);

        let mut table = Table::new(
            vec![
                Column::new("ID", 6),
                Column::new("TYPE", 5),
                Column::new("RECORDED AT", 20),
                Column::new("SOURCE", 8),
                Column::new("RAW", 14),
                Column::new("HOURS", 7),
            ],
            &cfg.separator_char,
        );

        for (ev, h) in events.iter().zip(hours.iter()).rev() {
            table.add_row(vec![
                ev.id.to_string(),
                ev.kind.to_db_str().to_string(),
                format!("{} {}", ev.date_str(), ev.time_str()),
                ev.source.clone(),
                ev.raw_scan.clone().unwrap_or_else(|| "-".to_string()),
                h.map(fmt_hours).unwrap_or_else(|| "-".to_string()),
            ]);
        }

        print!("{}", table.render());
        println!("{} event(s)", events.len());
    }

    Ok(())
}
