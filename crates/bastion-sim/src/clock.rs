//! Real-time clock domain for deferred tasks.
//!
//! Everything in the simulation counts ticks except the respawn delay,
//! which runs on wall-clock time so it keeps advancing while the
//! simulation is paused. The clock is injectable so tests can
//! fast-forward it deterministically.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Time elapsed since the clock's own epoch.
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let by = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.fetch_add(by, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

/// A one-shot task due at a point on a `Clock`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeferredTask {
    due_at: Option<Duration>,
}

impl DeferredTask {
    /// Arm the task to fire `delay` after `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.due_at = Some(now + delay);
    }

    /// Disarm the task. Returns whether it was pending.
    pub fn cancel(&mut self) -> bool {
        self.due_at.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    /// Time left until the task is due, if pending.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.due_at.map(|due| due.saturating_sub(now))
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.due_at {
            Some(due) if now >= due => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }
}
