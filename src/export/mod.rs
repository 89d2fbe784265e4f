mod csv;
mod json;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub use csv::write_csv;
pub use json::write_json;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Refuse to clobber an existing file unless `--force` was given.
pub fn ensure_writable(path: &str, force: bool) -> AppResult<()> {
    if Path::new(path).exists() && !force {
        return Err(AppError::Export(format!(
            "File already exists: {} (use --force to overwrite)",
            path
        )));
    }
    Ok(())
}

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
