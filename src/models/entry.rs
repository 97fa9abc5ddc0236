use chrono::{DateTime, Utc};
use serde::Serialize;

/// Daily hour budget split across the tasks of one standup answer.
pub const HOURS_PER_DAY: u32 = 8;

/// One timesheet line: what was done, on which working day, for how long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimesheetEntry {
    pub timestamp: DateTime<Utc>,
    pub text: String,
    pub spent_hrs: u32,
}

impl TimesheetEntry {
    pub fn date_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }
}
