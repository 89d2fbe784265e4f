pub mod attendance;
pub mod clock;
pub mod config;
pub mod db;
pub mod export;
pub mod hours;
pub mod init;
pub mod leave;
pub mod log;
pub mod login;
pub mod shift;
pub mod shift_request;
pub mod user;
