// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss deadline tracking.

use std::time::{Duration, Instant};

/// The single auto-dismiss deadline of one notice.
///
/// At most one deadline exists at any time: arming replaces the previous
/// deadline and [`fire`](DismissTimer::fire) disarms in the same call, so an
/// elapsed deadline is reported exactly once. Time is passed in explicitly;
/// the timer never reads the clock itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DismissTimer {
    deadline: Option<Instant>,
}

impl DismissTimer {
    /// Creates a timer with no deadline armed.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Drops any armed deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Arms a fresh deadline `delay` from `now`, replacing any previous one.
    pub fn arm(&mut self, delay: Duration, now: Instant) {
        self.deadline = Some(now + delay);
    }

    /// Whether a deadline is currently armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The armed deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` exactly once, when the armed deadline has passed.
    ///
    /// Firing disarms the timer, so a second call with the same `now`
    /// returns `false`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
