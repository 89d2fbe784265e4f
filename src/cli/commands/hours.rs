use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconcile::{Ledger, reconcile, reconcile_all, total_paired_hours};
use crate::core::report::{PeriodTotal, WorkHoursReport};
use crate::db::pool::DbPool;
use crate::db::queries::attendance::{
    EventFilter, load_all_events, load_events_between, load_user_events,
};
use crate::db::queries::users::find_by_id;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::date::period_bounds;
use crate::utils::formatting::fmt_hours;
use crate::utils::table::{Column, Table};
use chrono::Utc;

/// Work-hours report. Single-employee by default; `--all` runs the
/// multi-employee reconciliation for the HR overview; `--range` collapses
/// one employee's period into a single paired-hours total.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours {
        user,
        all,
        range,
        json,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(period) = range {
            let user_id =
                user.ok_or_else(|| AppError::Validation("user is required".into()))?;
            let (start, end) = period_bounds(period)?;

            let events = load_events_between(&pool.conn, Some(user_id), start, end)?;
            let total = PeriodTotal::build(user_id, start, end, total_paired_hours(&events));

            if *json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&total)
                        .map_err(|e| AppError::Other(e.to_string()))?
                );
            } else {
                println!(
                    "Total hours for employee {} ({} to {}): {} h",
                    user_id,
                    total.start_date,
                    total.end_date,
                    fmt_hours(total.total_hours)
                );
            }
            return Ok(());
        }

        if *all {
            let events = load_all_events(&pool.conn)?;
            let ledgers = reconcile_all(&events, Utc::now());

            if *json {
                let reports: Vec<WorkHoursReport> = ledgers
                    .iter()
                    .map(|(uid, ledger)| WorkHoursReport::build(*uid, ledger))
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&reports)
                        .map_err(|e| AppError::Other(e.to_string()))?
                );
            } else {
                for (uid, ledger) in &ledgers {
                    let name = find_by_id(&pool.conn, *uid)?
                        .map(|u| u.full_name())
                        .unwrap_or_else(|| format!("employee {}", uid));
                    header(format!("{} (id {})", name, uid));
                    print_ledger(ledger, cfg);
                }
            }
            return Ok(());
        }

        let user_id =
            user.ok_or_else(|| AppError::Validation("user is required".into()))?;

        let events = load_user_events(&mut pool, user_id, EventFilter::default())?;
        if events.is_empty() && !*json {
            info(format!("No attendance events for employee {}", user_id));
        }
        let ledger = reconcile(&events, Utc::now());

        if *json {
            let report = WorkHoursReport::build(user_id, &ledger);
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .map_err(|e| AppError::Other(e.to_string()))?
            );
        } else {
            print_ledger(&ledger, cfg);
        }
    }

    Ok(())
}

fn print_ledger(ledger: &Ledger, cfg: &Config) {
    let report = WorkHoursReport::build(0, ledger);

    let mut table = Table::new(
        vec![
            Column::new("DATE", 12),
            Column::new("IN", 7),
            Column::new("OUT", 7),
            Column::new("HOURS", 7),
            Column::new("STATUS", 10),
        ],
        &cfg.separator_char,
    );

    for day in &report.days {
        table.add_row(vec![
            day.date.clone(),
            day.clock_in.clone(),
            day.clock_out.clone(),
            fmt_hours(day.total_hours),
            if day.incomplete {
                "incomplete".to_string()
            } else {
                String::new()
            },
        ]);
    }

    print!("{}", table.render());
    println!(
        "Weekly total (last 7 days): {} h",
        fmt_hours(report.weekly_total)
    );
}
