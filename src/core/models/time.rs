//! Time-of-day parsing
//!
//! Times are wall-clock values without a date, written as zero-padded
//! 24-hour `HH:mm` (e.g. `09:30`). Nothing else is accepted: `9:30`,
//! `25:00`, `10:60` and `09:30:00` are all rejected.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::core::error::ScheduleError;

/// chrono format string matching `HH:mm`
pub const TIME_FORMAT: &str = "%H:%M";

// chrono's `%H` also takes single digits, so the shape is checked first
static HH_MM: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").ok());

/// Parse an `HH:mm` string into a time of day
///
/// Leading and trailing whitespace is ignored.
///
/// # Examples
///
/// ```
/// use astro_schedule::core::models::parse_time_of_day;
///
/// let t = parse_time_of_day("06:30").unwrap();
/// assert_eq!(t.to_string(), "06:30:00");
/// assert!(parse_time_of_day("6:30").is_err());
/// ```
pub fn parse_time_of_day(text: &str) -> Result<NaiveTime, ScheduleError> {
    let trimmed = text.trim();
    let invalid = || ScheduleError::InvalidTimeFormat {
        input: trimmed.to_string(),
        field: None,
    };

    let shape_ok = HH_MM.as_ref().is_some_and(|re| re.is_match(trimmed));
    if !shape_ok {
        return Err(invalid());
    }

    NaiveTime::parse_from_str(trimmed, TIME_FORMAT).map_err(|_| invalid())
}

/// Render a time of day as `HH:mm`
#[must_use]
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}
