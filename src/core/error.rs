//! Error types for schedule operations
//!
//! Only task construction and process plumbing can fail. Scheduling
//! outcomes such as conflicts or missing tasks are reported as values
//! (see [`crate::core::services::AddOutcome`]), never as errors.

use std::path::PathBuf;

use thiserror::Error;

/// Which side of an interval a time string belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    /// Start of the interval
    Start,
    /// End of the interval
    End,
}

impl std::fmt::Display for TimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Errors raised while building tasks or loading configuration
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A time string did not match the zero-padded 24-hour `HH:mm` form
    #[error(
        "Invalid {}time format: {input:?}. Use HH:mm",
        .field.map_or_else(String::new, |side| format!("{side} "))
    )]
    InvalidTimeFormat {
        /// The rejected text
        input: String,
        /// Start or end, when known
        field: Option<TimeField>,
    },

    /// End time is not strictly after start time
    #[error("End time must be after start time ({start} - {end})")]
    InvalidInterval {
        /// Parsed start, `HH:mm`
        start: String,
        /// Parsed end, `HH:mm`
        end: String,
    },

    /// Description was empty or whitespace only
    #[error("Task description must not be empty")]
    EmptyDescription,

    /// Configuration file could not be parsed
    #[error("invalid config file {path}: {message}")]
    Config {
        /// Path of the offending file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// IO error while reading configuration
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    /// Attach the interval side to a format error
    #[must_use]
    pub fn for_field(self, side: TimeField) -> Self {
        match self {
            Self::InvalidTimeFormat { input, .. } => Self::InvalidTimeFormat {
                input,
                field: Some(side),
            },
            other => other,
        }
    }
}
