//! In-flight counters released by scope guards.
//!
//! The app raises an `Activity` before awaiting a response and the guard
//! lowers it again when dropped, so the loading indicator and the disabled
//! submit control are restored on success, on failure, and when the
//! operation's future is dropped mid-flight.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct Activity(Rc<Cell<usize>>);

impl Activity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> ActivityGuard {
        self.0.set(self.0.get() + 1);
        ActivityGuard(Rc::clone(&self.0))
    }

    pub fn in_flight(&self) -> usize {
        self.0.get()
    }

    pub fn is_active(&self) -> bool {
        self.in_flight() > 0
    }
}

#[must_use = "the activity ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ActivityGuard(Rc<Cell<usize>>);

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}
