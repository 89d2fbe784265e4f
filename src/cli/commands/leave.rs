use crate::cli::parser::{Commands, LeaveAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::leave::{insert_leave, load_by_user, load_with_names, update_status};
use crate::db::queries::users::find_by_id;
use crate::db::audit;
use crate::errors::{AppError, AppResult};
use crate::models::leave::ReviewStatus;
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Leave { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            LeaveAction::Submit {
                user,
                from,
                to,
                reason,
            } => {
                let (user_id, from, to, reason) = match (user, from, to, reason) {
                    (Some(u), Some(f), Some(t), Some(r)) => (*u, f, t, r),
                    _ => {
                        return Err(AppError::Validation(
                            "userId, fromDate, toDate and reason are required".into(),
                        ));
                    }
                };

                let from_date =
                    parse_date(from).ok_or_else(|| AppError::InvalidDate(from.clone()))?;
                let to_date =
                    parse_date(to).ok_or_else(|| AppError::InvalidDate(to.clone()))?;
                if to_date < from_date {
                    return Err(AppError::Validation(
                        "toDate must not be before fromDate".into(),
                    ));
                }

                let req = insert_leave(&pool.conn, user_id, from_date, to_date, reason)?;

                audit(
                    &pool.conn,
                    "leave",
                    &req.id.to_string(),
                    &format!("Submitted {} to {} for employee {}", from, to, user_id),
                )?;

                success(format!(
                    "Leave request {} submitted ({} to {}, status {})",
                    req.id,
                    from,
                    to,
                    req.status.to_db_str()
                ));
            }

            LeaveAction::List { user, status } => {
                let status = match status {
                    Some(s) => Some(
                        ReviewStatus::parse(s)
                            .ok_or_else(|| AppError::InvalidStatus(s.clone()))?,
                    ),
                    None => None,
                };

                let mut table = Table::new(
                    vec![
                        Column::new("ID", 5),
                        Column::new("EMPLOYEE", 24),
                        Column::new("FROM", 12),
                        Column::new("TO", 12),
                        Column::new("STATUS", 10),
                        Column::new("APPROVER", 24),
                    ],
                    &cfg.separator_char,
                );

                let count = match user {
                    Some(uid) => {
                        // Same EMPLOYEE column as the HR-wide listing.
                        let employee = find_by_id(&pool.conn, *uid)?
                            .map(|u| u.full_name())
                            .unwrap_or_else(|| uid.to_string());
                        let requests = load_by_user(&pool.conn, *uid)?;
                        for r in &requests {
                            table.add_row(vec![
                                r.id.to_string(),
                                employee.clone(),
                                r.from_date.to_string(),
                                r.to_date.to_string(),
                                r.status.to_db_str().to_string(),
                                r.approved_by
                                    .map(|a| a.to_string())
                                    .unwrap_or_else(|| "-".to_string()),
                            ]);
                        }
                        requests.len()
                    }
                    None => {
                        let requests = load_with_names(&pool.conn, status)?;
                        for r in &requests {
                            table.add_row(vec![
                                r.request.id.to_string(),
                                r.employee.clone(),
                                r.request.from_date.to_string(),
                                r.request.to_date.to_string(),
                                r.request.status.to_db_str().to_string(),
                                r.approver.clone().unwrap_or_else(|| "-".to_string()),
                            ]);
                        }
                        requests.len()
                    }
                };

                print!("{}", table.render());
                println!("{} request(s)", count);
            }

            LeaveAction::SetStatus {
                id,
                status,
                approver,
            } => {
                let status = ReviewStatus::parse(status)
                    .ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

                if status.needs_approver() && approver.is_none() {
                    return Err(AppError::Validation("approverId is required".into()));
                }

                let updated = update_status(&pool.conn, *id, status, *approver)?
                    .ok_or_else(|| AppError::NotFound("Leave request".into()))?;

                audit(
                    &pool.conn,
                    "leave",
                    &id.to_string(),
                    &format!("Status set to {}", updated.status.to_db_str()),
                )?;

                success(format!(
                    "Leave request {} is now {}",
                    updated.id,
                    updated.status.to_db_str()
                ));
            }
        }
    }

    Ok(())
}
