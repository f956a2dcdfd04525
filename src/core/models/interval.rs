//! Time intervals within a single day

use chrono::{Duration, NaiveTime};

use super::time::format_time_of_day;
use crate::core::error::ScheduleError;

/// A `[start, end)` span of wall-clock time
///
/// The end is always strictly after the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeInterval {
    /// Build an interval, rejecting `end <= start`
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, ScheduleError> {
        if end <= start {
            return Err(ScheduleError::InvalidInterval {
                start: format_time_of_day(start),
                end: format_time_of_day(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Start of the interval
    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    /// End of the interval
    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length of the interval
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether two intervals share any time
    ///
    /// Touching endpoints (one ends exactly when the other starts) do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl std::fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            format_time_of_day(self.start),
            format_time_of_day(self.end)
        )
    }
}
