pub mod date;
pub mod path;
pub mod time;

pub use date::prev_working_day;
pub use time::parse_slack_ts;
