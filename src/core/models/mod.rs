//! Domain models for the schedule
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - "Do this, at this time"
//! - [`TimeInterval`] - A non-empty span of wall-clock time
//! - [`parse_time_of_day`] - The `HH:mm` time format

mod interval;
mod task;
mod time;

pub use interval::TimeInterval;
pub use task::{Task, TaskStatus};
pub use time::{TIME_FORMAT, format_time_of_day, parse_time_of_day};
