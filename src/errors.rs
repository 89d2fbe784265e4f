//! Unified application error type. Every layer (db, core, cli, export)
//! returns `AppError` so command handlers compose with `?`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// Client-side rejection: missing or malformed request parameters.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced entity absent on an update; no state change happened.
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid event type: {0}")]
    InvalidEventType(String),

    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    #[error("Invalid request type: {0}")]
    InvalidRequestType(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
