//! Core domain logic for the schedule
//!
//! This module contains pure business logic with no I/O dependencies.
//! Notification sinks are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, TimeInterval, time-of-day parsing)
//! - `services/` - Task factory and schedule manager
//! - `ports/` - Trait definitions for conflict observers
//! - `error` - Validation and configuration errors

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
