//! Log-backed conflict notifier

use log::warn;

use crate::core::ports::ConflictObserver;

/// Emits conflict notifications as `warn` log records
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a log notifier
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConflictObserver for LogNotifier {
    fn receive(&self, message: &str) {
        warn!(target: "astro_schedule::conflict", "{message}");
    }
}
