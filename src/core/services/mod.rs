//! Business logic services
//!
//! - [`factory`] - Validate raw input into tasks
//! - [`schedule`] - Conflict checking, ordering and completion

pub mod factory;
pub mod schedule;

pub use factory::TaskFactory;
pub use schedule::{AddOutcome, MarkOutcome, RemoveOutcome, ScheduleManager, conflict_message};
