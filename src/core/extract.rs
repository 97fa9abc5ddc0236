//! Standup answers → timesheet entries.

use crate::models::entry::HOURS_PER_DAY;
use crate::models::{RawMessage, TimesheetEntry};
use crate::utils::date::prev_working_day;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Jira link as rendered by Slack: `<https://x.atlassian.net/browse/AB-12|Title>`.
static JIRA_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<https://.*?atlassian\.net/browse/[a-zA-Z]+-\d+\|(.+?)>")
        .expect("static Jira link pattern")
});

/// Convert the standup conversation into timesheet entries.
///
/// Only the first human message of each day counts. Every line of that
/// message becomes one task, booked on the previous working day, and the
/// daily budget is split across the tasks (see [`distribute_hours`]).
pub fn extract_entries(mut messages: Vec<RawMessage>) -> Vec<TimesheetEntry> {
    messages.sort_by_key(|m| m.timestamp);

    let mut last_day: Option<NaiveDate> = None;
    let mut entries = Vec::new();

    for m in &messages {
        if m.is_from_bot() {
            continue;
        }

        let day = m.timestamp.date_naive();
        if last_day == Some(day) {
            continue;
        }
        last_day = Some(day);

        let tasks: Vec<&str> = m.text.split('\n').collect();
        let hours = distribute_hours(tasks.len());
        let booked_on = prev_working_day(m.timestamp);

        entries.extend(
            tasks
                .iter()
                .zip(hours)
                .map(|(task, spent_hrs)| TimesheetEntry {
                    timestamp: booked_on,
                    text: clean_task(task),
                    spent_hrs,
                }),
        );
    }

    tracing::debug!(
        messages = messages.len(),
        entries = entries.len(),
        "extracted timesheet entries"
    );

    entries
}

/// Strip leading bullets/spaces and unwrap Jira links to their title.
pub fn clean_task(line: &str) -> String {
    let trimmed = line.trim_start_matches(['•', ' ']);
    JIRA_LINK.replace_all(trimmed, "${1}").into_owned()
}

/// Split the daily budget over `n` tasks; the last one takes the remainder.
///
/// With more than 8 tasks every task but the last gets 0 hours.
pub fn distribute_hours(n: usize) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }

    let n32 = u32::try_from(n).unwrap_or(u32::MAX);
    let base = HOURS_PER_DAY / n32;
    let rest = HOURS_PER_DAY % n32;

    let mut hours = vec![base; n];
    hours[n - 1] = base + rest;
    hours
}
