//! Adapter implementations for port traits
//!
//! Concrete conflict observers that perform I/O:
//!
//! - `console` - Print notifications to stdout
//! - `logger` - Forward notifications to the `log` facade

mod console;
mod logger;

pub use console::ConsoleNotifier;
pub use logger::LogNotifier;
