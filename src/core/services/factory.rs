//! Task factory - turns raw text fields into a validated [`Task`]

use log::debug;

use crate::core::error::{ScheduleError, TimeField};
use crate::core::models::{Task, TimeInterval, parse_time_of_day};

/// Builds tasks from user input
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFactory;

impl TaskFactory {
    /// Validate the four input fields and build a pending task
    ///
    /// Checks run in order: start time format, end time format, end after
    /// start, then non-empty description. The first failure is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use astro_schedule::core::services::TaskFactory;
    ///
    /// let task = TaskFactory::create_task("Exercise", "06:00", "07:00", "High").unwrap();
    /// assert_eq!(task.to_string(), "06:00 - 07:00: Exercise [High]");
    /// ```
    pub fn create_task(
        description: &str,
        start_text: &str,
        end_text: &str,
        priority: &str,
    ) -> Result<Task, ScheduleError> {
        let start = parse_time_of_day(start_text).map_err(|e| e.for_field(TimeField::Start))?;
        let end = parse_time_of_day(end_text).map_err(|e| e.for_field(TimeField::End))?;
        let interval = TimeInterval::new(start, end)?;

        let description = description.trim();
        if description.is_empty() {
            return Err(ScheduleError::EmptyDescription);
        }

        debug!("built task {description:?} for {interval}");
        Ok(Task::new(description.to_string(), interval, priority.trim().to_string()))
    }
}
