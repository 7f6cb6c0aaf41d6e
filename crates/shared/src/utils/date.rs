//! Date handling for the exercise log.
//!
//! Stored exercise dates are full UTC timestamps. Everything user facing is at
//! calendar day precision: log entries are rendered as `Mon Jan 01 2024` and
//! the `from`/`to` filters name whole days.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use thiserror::Error;

/// Weekday, month, zero padded day of month, year
pub const LOG_DATE_FORMAT: &str = "%a %b %d %Y";

const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date and time without an offset, taken to be UTC
const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateError {
    #[error("Invalid date: {0:?}")]
    Invalid(String),
}

/// Renders a stored timestamp for the log, dropping the time of day
pub fn format_log_date(date: &DateTime<Utc>) -> String {
    date.format(LOG_DATE_FORMAT).to_string()
}

/// Parses a `from`/`to` filter. Accepts anything [`parse_timestamp`] does,
/// keeping only the (UTC) calendar day
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, DateError> {
    parse_timestamp(value).map(|d| d.date_naive())
}

/// Parses the date of a new exercise. A bare `YYYY-MM-DD` is midnight UTC, a
/// date and time without an offset is UTC
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DateError> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, CALENDAR_DATE_FORMAT) {
        return Ok(start_of_day(date));
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }

    LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|d| Utc.from_utc_datetime(&d))
        .ok_or_else(|| DateError::Invalid(value.to_owned()))
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Inclusive range of calendar days. Either end may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// First instant inside the range
    pub fn lower_bound(&self) -> Option<DateTime<Utc>> {
        self.from.map(start_of_day)
    }

    /// First instant after the range, i.e. the start of the day after `to`
    pub fn upper_bound(&self) -> Option<DateTime<Utc>> {
        self.to.and_then(|d| d.succ_opt()).map(start_of_day)
    }

    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        self.lower_bound().map_or(true, |lower| *date >= lower)
            && self.upper_bound().map_or(true, |upper| *date < upper)
    }
}
