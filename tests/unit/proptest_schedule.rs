//! Property-based tests for the schedule manager
//!
//! Uses proptest to verify properties that should hold for any sequence of adds.

use astro_schedule::core::models::Task;
use astro_schedule::core::services::{AddOutcome, ScheduleManager, TaskFactory};
use proptest::prelude::*;

/// A valid `(start, end)` pair as minutes since midnight
fn interval_minutes() -> impl Strategy<Value = (u32, u32)> {
    (0u32..1439).prop_flat_map(|start| (Just(start), (start + 1)..1440))
}

fn hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn build(index: usize, (start, end): (u32, u32)) -> Task {
    TaskFactory::create_task(&format!("task-{index}"), &hhmm(start), &hhmm(end), "Low").unwrap()
}

fn snapshot(manager: &ScheduleManager) -> Vec<(String, String)> {
    manager
        .list_tasks()
        .map(|t| (t.description().to_string(), t.interval().to_string()))
        .collect()
}

proptest! {
    /// No two scheduled tasks ever overlap
    #[test]
    fn scheduled_tasks_never_overlap(spans in prop::collection::vec(interval_minutes(), 0..30)) {
        let mut manager = ScheduleManager::new();
        for (i, span) in spans.into_iter().enumerate() {
            let _ = manager.add_task(build(i, span));
        }

        let tasks: Vec<&Task> = manager.list_tasks().collect();
        for (i, a) in tasks.iter().enumerate() {
            for b in &tasks[i + 1..] {
                prop_assert!(!(a.start() < b.end() && a.end() > b.start()));
            }
        }
    }

    /// The list is always sorted by start time
    #[test]
    fn list_is_sorted_by_start(spans in prop::collection::vec(interval_minutes(), 0..30)) {
        let mut manager = ScheduleManager::new();
        for (i, span) in spans.into_iter().enumerate() {
            if manager.add_task(build(i, span)) == AddOutcome::Added {
                let starts: Vec<_> = manager.list_tasks().map(Task::start).collect();
                prop_assert!(starts.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }

    /// A rejected add leaves the schedule untouched
    #[test]
    fn conflict_leaves_schedule_unchanged(spans in prop::collection::vec(interval_minutes(), 1..30)) {
        let mut manager = ScheduleManager::new();
        for (i, span) in spans.into_iter().enumerate() {
            let before = snapshot(&manager);
            let outcome = manager.add_task(build(i, span));
            if let AddOutcome::Conflict { existing } = outcome {
                prop_assert_eq!(snapshot(&manager), before.clone());
                prop_assert!(before.iter().any(|(d, _)| *d == existing));
            }
        }
    }
}
