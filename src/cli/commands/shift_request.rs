use crate::cli::parser::{Commands, ShiftRequestAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::shift_requests::{
    insert_request, load_by_user, load_with_names, update_status,
};
use crate::db::queries::shifts::find_by_id as find_shift;
use crate::db::queries::users::find_by_id as find_user;
use crate::db::audit;
use crate::errors::{AppError, AppResult};
use crate::models::leave::ReviewStatus;
use crate::models::shift_request::{ShiftOrigin, ShiftRequestType};
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::ShiftRequest { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            ShiftRequestAction::Submit {
                user,
                shift,
                request_type,
                note,
                origin,
            } => {
                let (user_id, shift_id, request_type) = match (user, shift, request_type) {
                    (Some(u), Some(s), Some(t)) => (*u, *s, t),
                    _ => {
                        return Err(AppError::Validation(
                            "userId, shiftId and requestType are required".into(),
                        ));
                    }
                };

                let request_type = ShiftRequestType::parse(request_type)
                    .ok_or_else(|| AppError::InvalidRequestType(request_type.clone()))?;

                let origin = match origin {
                    Some(o) => ShiftOrigin::parse(o)
                        .ok_or_else(|| AppError::InvalidStatus(o.clone()))?,
                    None => ShiftOrigin::Assigned,
                };

                // The referenced shift must exist before a request opens on it.
                find_shift(&pool.conn, shift_id)?
                    .ok_or_else(|| AppError::NotFound("Shift".into()))?;

                let req = insert_request(
                    &pool.conn,
                    user_id,
                    shift_id,
                    request_type,
                    note.as_deref(),
                    origin,
                )?;

                audit(
                    &pool.conn,
                    "shift_request",
                    &req.id.to_string(),
                    &format!(
                        "{} for shift {} by employee {}",
                        req.request_type.to_db_str(),
                        shift_id,
                        user_id
                    ),
                )?;

                success(format!(
                    "Shift request {} submitted ({} for shift {})",
                    req.id,
                    req.request_type.to_db_str(),
                    shift_id
                ));
            }

            ShiftRequestAction::List { user } => {
                let mut table = Table::new(
                    vec![
                        Column::new("ID", 5),
                        Column::new("EMPLOYEE", 24),
                        Column::new("SHIFT", 6),
                        Column::new("TYPE", 8),
                        Column::new("STATUS", 10),
                        Column::new("ORIGIN", 10),
                        Column::new("APPROVER", 24),
                    ],
                    &cfg.separator_char,
                );

                let count = match user {
                    Some(uid) => {
                        // Same EMPLOYEE column as the HR-wide listing.
                        let employee = find_user(&pool.conn, *uid)?
                            .map(|u| u.full_name())
                            .unwrap_or_else(|| uid.to_string());
                        let requests = load_by_user(&pool.conn, *uid)?;
                        for r in &requests {
                            table.add_row(vec![
                                r.id.to_string(),
                                employee.clone(),
                                r.shift_id.to_string(),
                                r.request_type.to_db_str().to_string(),
                                r.status.to_db_str().to_string(),
                                r.origin.to_db_str().to_string(),
                                r.approved_by
                                    .map(|a| a.to_string())
                                    .unwrap_or_else(|| "-".to_string()),
                            ]);
                        }
                        requests.len()
                    }
                    None => {
                        let requests = load_with_names(&pool.conn)?;
                        for r in &requests {
                            table.add_row(vec![
                                r.request.id.to_string(),
                                r.employee.clone(),
                                r.request.shift_id.to_string(),
                                r.request.request_type.to_db_str().to_string(),
                                r.request.status.to_db_str().to_string(),
                                r.request.origin.to_db_str().to_string(),
                                r.approver.clone().unwrap_or_else(|| "-".to_string()),
                            ]);
                        }
                        requests.len()
                    }
                };

                print!("{}", table.render());
                println!("{} request(s)", count);
            }

            ShiftRequestAction::SetStatus {
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
                    .ok_or_else(|| AppError::NotFound("Shift request".into()))?;

                audit(
                    &pool.conn,
                    "shift_request",
                    &id.to_string(),
                    &format!("Status set to {}", updated.status.to_db_str()),
                )?;

                success(format!(
                    "Shift request {} is now {}",
                    updated.id,
                    updated.status.to_db_str()
                ));
            }
        }
    }

    Ok(())
}
