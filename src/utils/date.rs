use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Default lower bound for `--from`: same day one calendar month ago.
pub fn default_from() -> NaiveDate {
    let t = today();
    t.checked_sub_months(Months::new(1)).unwrap_or(t)
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Midnight UTC of the given calendar date.
pub fn start_of_day_utc(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(NaiveTime::MIN).and_utc()
}

/// Previous working day at 00:00 UTC.
///
/// Monday goes back to Friday, every other day goes back one day.
/// NOTE: Sunday therefore maps to Saturday; kept as-is.
pub fn prev_working_day(ts: DateTime<Utc>) -> DateTime<Utc> {
    let shift = match ts.weekday() {
        Weekday::Mon => 3,
        _ => 1,
    };
    start_of_day_utc(ts.date_naive() - Duration::days(shift))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn tuesday_goes_to_monday() {
        let prev = prev_working_day(at(2021, 6, 29, 15, 42));
        assert_eq!(prev, at(2021, 6, 28, 0, 0));
        assert_eq!(prev.weekday(), Weekday::Mon);
    }

    #[test]
    fn monday_goes_to_friday() {
        let prev = prev_working_day(at(2021, 6, 28, 9, 5));
        assert_eq!(prev, at(2021, 6, 25, 0, 0));
        assert_eq!(prev.weekday(), Weekday::Fri);
    }

    #[test]
    fn sunday_goes_to_saturday() {
        let prev = prev_working_day(at(2021, 7, 4, 10, 0));
        assert_eq!(prev.weekday(), Weekday::Sat);
    }

    #[test]
    fn result_has_no_time_of_day() {
        for day in 1..=14 {
            let prev = prev_working_day(at(2021, 3, day, 23, 59));
            assert_eq!(prev.hour(), 0);
            assert_eq!(prev.minute(), 0);
            assert_eq!(prev.second(), 0);
            assert_eq!(prev.nanosecond(), 0);
        }
    }

    #[test]
    fn month_boundary() {
        // Thu 2021-07-01 -> Wed 2021-06-30
        assert_eq!(prev_working_day(at(2021, 7, 1, 0, 0)), at(2021, 6, 30, 0, 0));
        // Mon 2021-03-01 -> Fri 2021-02-26
        assert_eq!(prev_working_day(at(2021, 3, 1, 8, 0)), at(2021, 2, 26, 0, 0));
    }

    #[test]
    fn parse_date_accepts_iso_only() {
        assert_eq!(
            parse_date("2021-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 31).unwrap()
        );
        assert!(matches!(parse_date("31/01/2021"), Err(AppError::InvalidDate(_))));
        assert!(matches!(parse_date("2021-02-30"), Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn default_from_is_in_the_past() {
        assert!(default_from() < today());
    }
}
