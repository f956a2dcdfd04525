//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the schedule logic and
//! whatever reacts to it (console, log, UI).
//!
//! Implementations live in the `adapters` module.

mod observer;

pub use observer::{ConflictObserver, ObserverRegistry};
