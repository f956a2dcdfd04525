//! Task model
//!
//! A task occupies a time interval in the day. Tasks are built by
//! [`TaskFactory`](crate::core::services::TaskFactory) from user input and
//! owned by the [`ScheduleManager`](crate::core::services::ScheduleManager).

use chrono::NaiveTime;
use super::interval::TimeInterval;

/// A scheduled task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// What needs to be done; also the lookup key (case-insensitive)
    description: String,

    /// When the task happens
    interval: TimeInterval,

    /// Free-form label such as "High" or "Low"; stored as given
    priority: String,

    /// Set once the task is done, never cleared
    completed: bool,
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    /// Not done yet
    #[default]
    Pending,
    /// Done
    Completed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl Task {
    /// Create a pending task
    ///
    /// Crate-private: validated construction goes through the factory.
    pub(crate) fn new(description: String, interval: TimeInterval, priority: String) -> Self {
        Self {
            description,
            interval,
            priority,
            completed: false,
        }
    }

    /// Task description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Occupied interval
    #[must_use]
    pub const fn interval(&self) -> &TimeInterval {
        &self.interval
    }

    /// Start time
    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.interval.start()
    }

    /// End time
    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.interval.end()
    }

    /// Priority label
    #[must_use]
    pub fn priority(&self) -> &str {
        &self.priority
    }

    /// Whether the task is done
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Current status
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        if self.completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        }
    }

    /// Mark the task done (idempotent)
    pub const fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Case-insensitive description match
    #[must_use]
    pub fn matches_description(&self, description: &str) -> bool {
        self.description.to_lowercase() == description.to_lowercase()
    }

    /// Whether this task's interval overlaps another's
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.interval.overlaps(&other.interval)
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} [{}]", self.interval, self.description, self.priority)?;
        if self.completed {
            write!(f, " (Done)")?;
        }
        Ok(())
    }
}
