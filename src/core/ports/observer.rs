//! Conflict observer port
//!
//! Observers are told when a task could not be added because it overlaps
//! an existing one. They cannot influence the decision; by the time they
//! are called the candidate task has already been discarded.

/// A sink for conflict notifications
///
/// Any `Fn(&str)` closure is an observer, so ad-hoc sinks need no type:
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use astro_schedule::core::ports::ConflictObserver;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = {
///     let seen = Rc::clone(&seen);
///     move |msg: &str| seen.borrow_mut().push(msg.to_string())
/// };
/// sink.receive("clash");
/// assert_eq!(seen.borrow().as_slice(), ["clash"]);
/// ```
pub trait ConflictObserver {
    /// Receive a human-readable conflict message
    fn receive(&self, message: &str);
}

impl<F> ConflictObserver for F
where
    F: Fn(&str),
{
    fn receive(&self, message: &str) {
        self(message);
    }
}

/// Ordered list of registered observers
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Box<dyn ConflictObserver>>,
}

impl ObserverRegistry {
    /// Append an observer; the same sink may be registered more than once
    pub fn add(&mut self, observer: Box<dyn ConflictObserver>) {
        self.observers.push(observer);
    }

    /// Deliver a message to every observer, in registration order
    pub fn notify(&self, message: &str) {
        for observer in &self.observers {
            observer.receive(message);
        }
    }

    /// Number of registered observers
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True when nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
