//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Rendering goes to any
//! writer so the shell can be driven from tests.

use std::io::{self, Write};

use serde::Serialize;

use crate::core::models::{Task, format_time_of_day};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Task information for display
#[derive(Debug, Clone, Serialize)]
pub struct TaskInfo {
    /// Task description
    pub description: String,
    /// Start time, `HH:mm`
    pub start: String,
    /// End time, `HH:mm`
    pub end: String,
    /// Length in minutes
    pub duration_minutes: i64,
    /// Priority label
    pub priority: String,
    /// Status: pending, completed
    pub status: String,
    /// The human-readable line
    #[serde(skip)]
    pub line: String,
}

impl From<&Task> for TaskInfo {
    fn from(task: &Task) -> Self {
        Self {
            description: task.description().to_string(),
            start: format_time_of_day(task.start()),
            end: format_time_of_day(task.end()),
            duration_minutes: task.interval().duration().num_minutes(),
            priority: task.priority().to_string(),
            status: task.status().to_string(),
            line: task.to_string(),
        }
    }
}

/// Result of listing the schedule
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Tasks in start-time order
    pub tasks: Vec<TaskInfo>,
    /// Total count
    pub total: usize,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Operation name (add, remove, done)
    pub operation: String,
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl TaskListResult {
    /// Collect tasks into a list result
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let tasks: Vec<TaskInfo> = tasks.into_iter().map(TaskInfo::from).collect();
        Self {
            total: tasks.len(),
            tasks,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, out: &mut impl Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.render_human(out),
            OutputMode::Json => render_json(self, out),
        }
    }

    fn render_human(&self, out: &mut impl Write) -> io::Result<()> {
        if self.tasks.is_empty() {
            return writeln!(out, "No tasks scheduled for the day.");
        }
        for task in &self.tasks {
            writeln!(out, "{}", task.line)?;
        }
        Ok(())
    }
}

impl OperationResult {
    /// A successful operation
    #[must_use]
    pub fn ok(operation: &str, message: impl Into<String>) -> Self {
        Self {
            operation: operation.to_string(),
            success: true,
            message: message.into(),
        }
    }

    /// A failed operation
    #[must_use]
    pub fn failed(operation: &str, message: impl Into<String>) -> Self {
        Self {
            operation: operation.to_string(),
            success: false,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, out: &mut impl Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => writeln!(out, "{}", self.message),
            OutputMode::Json => render_json(self, out),
        }
    }
}

fn render_json(value: &impl Serialize, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", serde_json::to_string(value).unwrap_or_default())
}
