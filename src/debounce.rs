//! Keystroke debouncing
//!
//! Holds the most recent input value and reports it settled only once the
//! quiet period has elapsed with no further change. Deadline-based and
//! polled from the event loop tick; no timer thread.

use std::time::{Duration, Instant};

/// Debounce timer for input values
///
/// `update` records the latest value and arms a deadline; any update before
/// the deadline replaces the value and restarts the countdown. `poll`
/// returns the settled value exactly once after the deadline passes. Only
/// the latest value is ever eligible to settle; there is no queue.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Latest value and its settle deadline, if a change is pending
    pending: Option<(String, Instant)>,
    /// Last value that settled, used to suppress re-settling an unchanged value
    last_settled: Option<String>,
}

impl Debouncer {
    /// Create a new debouncer with the given quiet period
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
            last_settled: None,
        }
    }

    /// Record a changed input value and restart the countdown
    pub fn update(&mut self, value: &str) {
        self.update_at(value, Instant::now());
    }

    /// Record a changed input value with an explicit clock reading
    pub fn update_at(&mut self, value: &str, now: Instant) {
        self.pending = Some((value.to_string(), now + self.delay));
    }

    /// Return the settled value, if the quiet period has elapsed
    ///
    /// Settles at most once per pending value; an unchanged value (equal to
    /// the last settled one) is swallowed rather than re-emitted.
    pub fn poll(&mut self) -> Option<String> {
        self.poll_at(Instant::now())
    }

    /// Poll with an explicit clock reading
    pub fn poll_at(&mut self, now: Instant) -> Option<String> {
        let due = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if !due {
            return None;
        }

        let (value, _) = self.pending.take()?;
        if self.last_settled.as_deref() == Some(value.as_str()) {
            return None;
        }
        self.last_settled = Some(value.clone());
        Some(value)
    }

    /// Whether a change is waiting for its quiet period to elapse
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending change and forget the last settled value
    pub fn reset(&mut self) {
        self.pending = None;
        self.last_settled = None;
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
