//! Console conflict notifier

use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use log::warn;

use crate::core::ports::ConflictObserver;

/// Prefix printed before every notification
pub const NOTIFICATION_PREFIX: &str = "⚠ Notification: ";

/// Prints conflict notifications to stdout, or to any writer
///
/// Write failures (e.g. a closed pipe) are logged and otherwise ignored;
/// a notification must never abort the schedule.
#[derive(Debug)]
pub struct ConsoleNotifier<W: Write = Stdout> {
    out: RefCell<W>,
}

impl ConsoleNotifier {
    /// Create a notifier writing to stdout
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleNotifier<W> {
    /// Create a notifier writing to `out`
    pub fn with_writer(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// The line printed for a message
    #[must_use]
    pub fn format(message: &str) -> String {
        format!("{NOTIFICATION_PREFIX}{message}")
    }
}

impl<W: Write> ConflictObserver for ConsoleNotifier<W> {
    fn receive(&self, message: &str) {
        let mut out = self.out.borrow_mut();
        let written = writeln!(out, "{}", Self::format(message)).and_then(|()| out.flush());
        if let Err(err) = written {
            warn!("could not print conflict notification: {err}");
        }
    }
}
