//! Time utilities: Slack timestamp parsing and formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};

/// Parse a Slack `ts` value (`"1625048244"` or `"1625048244.000500"`).
///
/// The digits after the dot are read as a plain integer and applied as a
/// millisecond count, whatever their length: `".000500"` adds 500 ms.
pub fn parse_slack_ts(ts: &str) -> AppResult<DateTime<Utc>> {
    if ts.is_empty() {
        return Err(AppError::Parse("empty timestamp".into()));
    }

    let (secs_raw, frac_raw) = match ts.split_once('.') {
        Some((secs, frac)) => (secs, Some(frac)),
        None => (ts, None),
    };

    let secs: i64 = secs_raw
        .parse()
        .map_err(|_| AppError::Parse(format!("invalid seconds in timestamp '{ts}'")))?;

    let base = DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| AppError::Parse(format!("timestamp out of range: '{ts}'")))?;

    let Some(frac_raw) = frac_raw else {
        return Ok(base);
    };

    let millis: i64 = frac_raw
        .parse()
        .map_err(|_| AppError::Parse(format!("invalid fraction in timestamp '{ts}'")))?;

    Duration::try_milliseconds(millis)
        .and_then(|d| base.checked_add_signed(d))
        .ok_or_else(|| AppError::Parse(format!("timestamp out of range: '{ts}'")))
}

/// Whole-second Slack form used for the `oldest` request field.
pub fn format_slack_ts(dt: DateTime<Utc>) -> String {
    format!("{}.000000", dt.timestamp())
}
