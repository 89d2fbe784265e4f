pub mod attendance;
pub mod day_summary;
pub mod event_type;
pub mod leave;
pub mod shift;
pub mod shift_request;
pub mod user;
