//! Cancellable periodic tasks on a simulated clock
//!
//! Timers hold absolute due times. The owner advances the clock and fires
//! whichever timer is due first; a cancelled timer never fires again until
//! it is restarted.

use std::time::Duration;

/// A periodic task
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Option<Duration>,
}

impl IntervalTimer {
    /// `period` must be non-zero
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Next due time, if active
    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    /// (Re)start so the first firing is one period after `now`
    ///
    /// A due time past `Duration::MAX` is never reached, so the timer stays
    /// inactive.
    pub fn start(&mut self, now: Duration) {
        self.next_due = now.checked_add(self.period);
    }

    /// Stop firing. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Due time if the timer should fire at or before `deadline`
    pub fn due_by(&self, deadline: Duration) -> Option<Duration> {
        self.next_due.filter(|due| *due <= deadline)
    }

    /// Record one firing and schedule the next
    pub fn reschedule(&mut self) {
        self.next_due = self.next_due.and_then(|due| due.checked_add(self.period));
    }
}
