//! Time sources for the interaction core.
//!
//! Every delayed task is keyed on a monotonic `Instant`, and chat messages are
//! stamped with local wall time. Both come from a `Clock` so the whole core can
//! be driven deterministically: the terminal UI uses `SystemClock`, while tests
//! and the scripted demo use `ManualClock` and step time forward explicitly.

use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use chrono::{DateTime, Local, TimeDelta};

/// A source of monotonic and wall-clock time.
pub trait Clock {
    /// Monotonic time used to schedule and fire delayed tasks.
    fn now(&self) -> Instant;

    /// Local wall time used for display timestamps.
    fn local_time(&self) -> DateTime<Local>;
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn local_time(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when `advance` is called.
#[derive(Debug)]
pub struct ManualClock {
    instant: Cell<Instant>,
    wall: Cell<DateTime<Local>>,
}

impl ManualClock {
    /// Start at the current real time.
    pub fn new() -> Self {
        Self::starting_at(Local::now())
    }

    /// Start with the wall clock reading `wall`.
    pub fn starting_at(wall: DateTime<Local>) -> Self {
        Self {
            instant: Cell::new(Instant::now()),
            wall: Cell::new(wall),
        }
    }

    /// Move both readings forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.instant.set(self.instant.get() + by);
        let delta = TimeDelta::from_std(by).unwrap_or_else(|_| TimeDelta::zero());
        self.wall.set(self.wall.get() + delta);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.instant.get()
    }

    fn local_time(&self) -> DateTime<Local> {
        self.wall.get()
    }
}
