use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::users::find_by_staff_id;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Credential check stub: plaintext compare, intentionally not hardened.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { staff_id, password } = cmd {
        let staff_id = staff_id
            .as_deref()
            .ok_or_else(|| AppError::Validation("staffId and password are required.".into()))?;
        let password = password
            .as_deref()
            .ok_or_else(|| AppError::Validation("staffId and password are required.".into()))?;

        let pool = DbPool::new(&cfg.database)?;

        let user = find_by_staff_id(&pool.conn, staff_id)?
            .ok_or(AppError::InvalidCredentials)?;

        if user.password != password {
            return Err(AppError::InvalidCredentials);
        }

        success("Login successful");
        println!(
            "{}",
            serde_json::to_string_pretty(&user.payload())
                .map_err(|e| AppError::Other(e.to_string()))?
        );
    }

    Ok(())
}
