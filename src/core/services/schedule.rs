//! Schedule manager - owns the day's tasks
//!
//! Tasks are kept sorted by start time and never overlap. A task that
//! would overlap is rejected and the registered observers are told which
//! existing task it collided with.

use log::{debug, info};

use crate::core::models::Task;
use crate::core::ports::{ConflictObserver, ObserverRegistry};

/// Result of [`ScheduleManager::add_task`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    /// The task was inserted
    Added,
    /// The task overlapped an existing one and was discarded
    Conflict {
        /// Description of the first existing task found to overlap
        existing: String,
    },
}

/// Result of [`ScheduleManager::remove_task`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RemoveOutcome {
    /// One matching task was removed
    Removed,
    /// No task has that description
    NotFound,
}

/// Result of [`ScheduleManager::mark_task_done`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MarkOutcome {
    /// The first matching task is now completed
    Marked,
    /// No task has that description
    NotFound,
}

/// Build the message sent to observers on a conflict
#[must_use]
pub fn conflict_message(existing: &str) -> String {
    format!("Task conflicts with existing task \"{existing}\"")
}

/// The day's schedule
///
/// One instance per run, created by the entry point and handed to the shell.
#[derive(Debug, Default)]
pub struct ScheduleManager {
    tasks: Vec<Task>,
    observers: ObserverRegistry,
}

impl ScheduleManager {
    /// Create an empty schedule with no observers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a conflict observer
    pub fn add_observer(&mut self, observer: impl ConflictObserver + 'static) {
        self.observers.add(Box::new(observer));
    }

    /// Number of registered observers
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Add a task unless it overlaps an existing one
    ///
    /// Only the first overlapping task is reported. On conflict the
    /// schedule is left exactly as it was.
    pub fn add_task(&mut self, task: Task) -> AddOutcome {
        debug!("adding task {:?} ({})", task.description(), task.interval());

        if let Some(existing) = self.tasks.iter().find(|t| task.conflicts_with(t)) {
            let existing = existing.description().to_string();
            info!("rejected {:?}: overlaps {existing:?}", task.description());
            if self.observers.is_empty() {
                debug!("no conflict observers registered");
            }
            self.observers.notify(&conflict_message(&existing));
            return AddOutcome::Conflict { existing };
        }

        info!("added task {:?}", task.description());
        self.tasks.push(task);
        // Stable: equal start times keep insertion order
        self.tasks.sort_by_key(Task::start);
        AddOutcome::Added
    }

    /// Remove the first task whose description matches (case-insensitive)
    pub fn remove_task(&mut self, description: &str) -> RemoveOutcome {
        debug!("removing task {description:?}");
        match self.tasks.iter().position(|t| t.matches_description(description)) {
            Some(index) => {
                let removed = self.tasks.remove(index);
                info!("removed task {:?}", removed.description());
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// Mark the first task whose description matches as completed
    ///
    /// Marking an already completed task again still reports `Marked`.
    pub fn mark_task_done(&mut self, description: &str) -> MarkOutcome {
        debug!("marking task {description:?} done");
        match self.tasks.iter_mut().find(|t| t.matches_description(description)) {
            Some(task) => {
                task.mark_completed();
                info!("completed task {:?}", task.description());
                MarkOutcome::Marked
            }
            None => MarkOutcome::NotFound,
        }
    }

    /// Tasks in start-time order
    ///
    /// The iterator is `Clone`, so it can be replayed without touching the schedule.
    pub fn list_tasks(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Number of scheduled tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when nothing is scheduled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
