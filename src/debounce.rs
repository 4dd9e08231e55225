use std::time::{Duration, Instant};

/// A single pending task that fires once its input has been quiet for
/// `quiet`. Restarting supersedes whatever was pending; nothing is queued.
///
/// Time is passed in by the caller so the owner decides what "now" is.
#[derive(Debug, Clone)]
pub struct Debounce {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Cancels any pending run and schedules a new one `quiet` after `now`.
    pub fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once per scheduled run, when `now` has reached
    /// the deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
