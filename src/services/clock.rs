use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::models::WallTime;

/// Formats accepted in the `/{time}` route, tried in order
const TIME_FORMATS: &[&str] = &["%H:%M", "%I:%M %p", "%I:%M%p"];

/// Errors turning user input into a wall-clock time
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("Unable to parse time: {0}")]
    UnparseableTime(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Parse a time like `15:05`, `3:05 PM` or `3:05pm`
///
/// A `+` stands for a space, since path segments are not form-decoded.
pub fn parse_time(input: &str) -> Result<WallTime, ClockError> {
    let normalized = input.replace('+', " ").trim().to_uppercase();

    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok())
        .map(|time| WallTime::from_timelike(&time))
        .ok_or_else(|| ClockError::UnparseableTime(input.to_string()))
}

/// Format as a 12-hour time, eg `3:05 PM`
pub fn format_time(time: WallTime) -> String {
    let meridiem = if time.is_pm() { "PM" } else { "AM" };
    format!("{}:{:02} {}", time.hour12(), time.minute, meridiem)
}

/// Resolve an IANA timezone name such as `Australia/Sydney`
pub fn parse_timezone(name: &str) -> Result<Tz, ClockError> {
    name.parse::<Tz>()
        .map_err(|_| ClockError::UnknownTimezone(name.to_string()))
}

/// Wall-clock time at `instant` in the named timezone
pub fn time_in_timezone(name: &str, instant: DateTime<Utc>) -> Result<WallTime, ClockError> {
    let tz = parse_timezone(name)?;
    Ok(WallTime::from_timelike(&instant.with_timezone(&tz)))
}

/// Current wall-clock time in the named timezone
pub fn now_in_timezone(name: &str) -> Result<WallTime, ClockError> {
    time_in_timezone(name, Utc::now())
}
