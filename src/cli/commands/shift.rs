use crate::cli::parser::{Commands, ShiftAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::shifts::{
    delete_shift, insert_shift, load_all, load_available, load_for_user, update_status,
};
use crate::db::audit;
use crate::errors::{AppError, AppResult};
use crate::models::shift::{Shift, ShiftStatus};
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            ShiftAction::Create {
                description,
                assign,
                status,
                created_by,
            } => {
                let description = description
                    .as_deref()
                    .ok_or_else(|| AppError::Validation("description is required".into()))?;

                let status = match status {
                    Some(s) => ShiftStatus::parse(s)
                        .ok_or_else(|| AppError::InvalidStatus(s.clone()))?,
                    // An assignee at creation implies ASSIGNED.
                    None if assign.is_some() => ShiftStatus::Assigned,
                    None => ShiftStatus::Available,
                };

                let shift = insert_shift(&pool.conn, description, *assign, status, *created_by)?;

                audit(
                    &pool.conn,
                    "shift",
                    &shift.id.to_string(),
                    &format!("Created with status {}", shift.status.to_db_str()),
                )?;

                success(format!(
                    "Shift {} created ({})",
                    shift.id,
                    shift.status.to_db_str()
                ));
            }

            ShiftAction::List { user, available } => {
                let shifts = if let Some(uid) = user {
                    load_for_user(&pool.conn, *uid)?
                } else if *available {
                    load_available(&pool.conn)?
                } else {
                    load_all(&pool.conn)?
                };

                print_shifts(&shifts, cfg);
            }

            ShiftAction::SetStatus { id, status, assign } => {
                let status = ShiftStatus::parse(status)
                    .ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

                let shift = update_status(&pool.conn, *id, status, *assign)?
                    .ok_or_else(|| AppError::NotFound("Shift".into()))?;

                audit(
                    &pool.conn,
                    "shift",
                    &id.to_string(),
                    &format!("Status set to {}", shift.status.to_db_str()),
                )?;

                success(format!(
                    "Shift {} is now {}",
                    shift.id,
                    shift.status.to_db_str()
                ));
            }

            ShiftAction::Delete { id } => {
                if !delete_shift(&pool.conn, *id)? {
                    return Err(AppError::NotFound("Shift".into()));
                }

                audit(&pool.conn, "shift", &id.to_string(), "Deleted")?;
                success(format!("Shift {} deleted", id));
            }
        }
    }

    Ok(())
}

fn print_shifts(shifts: &[Shift], cfg: &Config) {
    let mut table = Table::new(
        vec![
            Column::new("ID", 5),
            Column::new("DESCRIPTION", 32),
            Column::new("ASSIGNED", 9),
            Column::new("STATUS", 10),
            Column::new("CREATED", 26),
        ],
        &cfg.separator_char,
    );

    for s in shifts {
        table.add_row(vec![
            s.id.to_string(),
            s.description.clone(),
            s.assigned_to
                .map(|a| a.to_string())
                .unwrap_or_else(|| "-".to_string()),
            s.status.to_db_str().to_string(),
            s.created_at.clone(),
        ]);
    }

    print!("{}", table.render());
    println!("{} shift(s)", shifts.len());
}
