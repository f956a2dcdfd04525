//! Interactive console shell
//!
//! A numbered menu over a [`ScheduleManager`]. The shell only prompts,
//! reads and prints; every decision is made by the factory or the manager.
//! Input and output are generic so the loop can be scripted in tests.

use std::io::{BufRead, Write};

use log::debug;

use crate::config::ShellConfig;
use crate::core::services::{
    AddOutcome, MarkOutcome, RemoveOutcome, ScheduleManager, TaskFactory, conflict_message,
};
use crate::output::{OperationResult, OutputMode, TaskListResult};

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Add Task
    Add,
    /// 2. Remove Task
    Remove,
    /// 3. View Tasks
    View,
    /// 4. Mark Task Completed
    MarkDone,
    /// 5. Exit
    Exit,
}

impl std::str::FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(1) => Ok(Self::Add),
            Ok(2) => Ok(Self::Remove),
            Ok(3) => Ok(Self::View),
            Ok(4) => Ok(Self::MarkDone),
            Ok(5) => Ok(Self::Exit),
            _ => Err(format!("Invalid choice: {}", s.trim())),
        }
    }
}

const MENU: &[&str] = &[
    "1. Add Task",
    "2. Remove Task",
    "3. View Tasks",
    "4. Mark Task Completed",
    "5. Exit",
];

/// The console loop
#[derive(Debug)]
pub struct Shell<'a> {
    manager: &'a mut ScheduleManager,
    mode: OutputMode,
    title: String,
}

impl<'a> Shell<'a> {
    /// Create a shell over an existing schedule
    pub fn new(manager: &'a mut ScheduleManager, mode: OutputMode, config: &ShellConfig) -> Self {
        Self {
            manager,
            mode,
            title: config.title.clone(),
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self, mut input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
        loop {
            self.print_menu(&mut out)?;
            let Some(line) = read_line(&mut input)? else {
                debug!("input closed, leaving shell");
                break;
            };

            let Ok(choice) = line.parse::<MenuChoice>() else {
                OperationResult::failed("menu", "Invalid choice. Try again.")
                    .render(self.mode, &mut out)?;
                continue;
            };

            debug!("menu choice {choice:?}");
            let keep_going = match choice {
                MenuChoice::Add => self.add(&mut input, &mut out)?,
                MenuChoice::Remove => self.remove(&mut input, &mut out)?,
                MenuChoice::View => {
                    TaskListResult::from_tasks(self.manager.list_tasks()).render(self.mode, &mut out)?;
                    true
                }
                MenuChoice::MarkDone => self.mark_done(&mut input, &mut out)?,
                MenuChoice::Exit => {
                    OperationResult::ok("exit", "Exiting... Goodbye!").render(self.mode, &mut out)?;
                    false
                }
            };
            out.flush()?;

            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    fn print_menu(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if self.mode == OutputMode::Json {
            return Ok(());
        }
        writeln!(out, "\n--- {} ---", self.title)?;
        for entry in MENU {
            writeln!(out, "{entry}")?;
        }
        write!(out, "Choose option: ")?;
        out.flush()?;
        Ok(())
    }

    /// Prompt for one field; `None` when input has ended
    fn prompt(
        &self,
        label: &str,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> anyhow::Result<Option<String>> {
        if self.mode == OutputMode::Human {
            write!(out, "{label}: ")?;
            out.flush()?;
        }
        read_line(input)
    }

    fn add(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<bool> {
        let Some(description) = self.prompt("Description", input, out)? else {
            return Ok(false);
        };
        let Some(start) = self.prompt("Start time (HH:mm)", input, out)? else {
            return Ok(false);
        };
        let Some(end) = self.prompt("End time (HH:mm)", input, out)? else {
            return Ok(false);
        };
        let Some(priority) = self.prompt("Priority (High/Medium/Low)", input, out)? else {
            return Ok(false);
        };

        let result = match TaskFactory::create_task(&description, &start, &end, &priority) {
            Err(err) => OperationResult::failed("add", format!("Error: {err}")),
            Ok(task) => match self.manager.add_task(task) {
                AddOutcome::Added => {
                    OperationResult::ok("add", "Task added successfully. No conflicts.")
                }
                AddOutcome::Conflict { existing } => match self.mode {
                    // Observers have already reported the clash in human mode
                    OutputMode::Human => OperationResult::failed("add", "Task was not added."),
                    OutputMode::Json => OperationResult::failed("add", conflict_message(&existing)),
                },
            },
        };
        result.render(self.mode, out)?;
        Ok(true)
    }

    fn remove(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<bool> {
        let Some(description) = self.prompt("Enter task description to remove", input, out)? else {
            return Ok(false);
        };
        let result = match self.manager.remove_task(description.trim()) {
            RemoveOutcome::Removed => OperationResult::ok("remove", "Task removed successfully."),
            RemoveOutcome::NotFound => OperationResult::failed("remove", "Error: Task not found."),
        };
        result.render(self.mode, out)?;
        Ok(true)
    }

    fn mark_done(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<bool> {
        let Some(description) = self.prompt("Enter task description to mark done", input, out)?
        else {
            return Ok(false);
        };
        let result = match self.manager.mark_task_done(description.trim()) {
            MarkOutcome::Marked => OperationResult::ok("done", "Task marked as completed."),
            MarkOutcome::NotFound => OperationResult::failed("done", "Error: Task not found."),
        };
        result.render(self.mode, out)?;
        Ok(true)
    }
}

/// Read one line without its terminator; `None` at end of input
///
/// Invalid UTF-8 is replaced rather than rejected so a stray byte cannot
/// end the session and drop the schedule.
fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let mut line = String::from_utf8_lossy(&buf).into_owned();
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
