use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::users::{insert_user, list_employees};
use crate::db::audit;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            UserAction::Add {
                staff_id,
                first_name,
                last_name,
                password,
                role,
                department,
            } => {
                let id = insert_user(
                    &pool.conn,
                    staff_id,
                    first_name,
                    last_name,
                    password,
                    *role,
                    *department,
                )?;

                audit(
                    &pool.conn,
                    "user",
                    staff_id,
                    &format!("Created user {} {} (id {})", first_name, last_name, id),
                )?;

                success(format!(
                    "User {} {} created with id {}",
                    first_name, last_name, id
                ));
            }

            UserAction::List => {
                let employees = list_employees(&pool.conn)?;

                let mut table = Table::new(
                    vec![
                        Column::new("ID", 5),
                        Column::new("STAFF", 10),
                        Column::new("NAME", 28),
                        Column::new("DEPT", 6),
                    ],
                    &cfg.separator_char,
                );

                for u in &employees {
                    table.add_row(vec![
                        u.id.to_string(),
                        u.staff_id.clone(),
                        u.full_name(),
                        u.department_id
                            .map(|d| d.to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    ]);
                }

                print!("{}", table.render());
                println!("{} employee(s)", employees.len());
            }
        }
    }

    Ok(())
}
