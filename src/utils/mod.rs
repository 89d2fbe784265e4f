pub mod colors;
pub mod date;
pub mod formatting;
pub mod table;
pub mod time;

pub use date::{parse_date, period_bounds};
pub use formatting::fmt_hours;
pub use time::{hhmm, parse_timestamp};
