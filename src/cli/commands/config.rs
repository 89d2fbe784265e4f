use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let config = Config::load()?;
            println!("📄 Current configuration:");
            println!(
                "{}",
                serde_yaml::to_string(&config).map_err(|_| AppError::ConfigLoad)?
            );
        }

        if *check {
            let missing = Config::missing_keys()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in missing {
                    warning(format!("Missing config field: {}", key));
                }
            }
        }
    }

    Ok(())
}
