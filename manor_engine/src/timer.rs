//! Countdown timer for a play session.
//!
//! Elapsed time is measured against a monotonic clock sampled on demand, so
//! time keeps passing while the game sits blocked on input. Nothing is
//! accumulated until [`CountdownTimer::start`] is called, which keeps the menu
//! phase from eating into the budget.

use log::{debug, info};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic instants.
pub trait Clock: fmt::Debug {
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;
impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}
impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}
impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Fixed budget of whole seconds, counted down while running.
#[derive(Debug)]
pub struct CountdownTimer {
    total_secs: u64,
    clock: Box<dyn Clock>,
    banked: Duration,
    running_since: Option<Instant>,
    started: bool,
}
impl CountdownTimer {
    /// A timer on the real monotonic clock.
    pub fn new(total_secs: u64) -> Self {
        Self::with_clock(total_secs, Box::new(MonotonicClock))
    }

    pub fn with_clock(total_secs: u64, clock: Box<dyn Clock>) -> Self {
        Self {
            total_secs,
            clock,
            banked: Duration::ZERO,
            running_since: None,
            started: false,
        }
    }

    /// Begin counting down. Does nothing if already running.
    pub fn start(&mut self) {
        if self.running_since.is_some() {
            debug!("timer start requested while already running; ignored");
            return;
        }
        self.started = true;
        self.running_since = Some(self.clock.now());
        info!("countdown started with {}s on the clock", self.remaining_seconds());
    }

    /// Stop accumulating elapsed time without resetting it.
    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked += self.clock.now().saturating_duration_since(since);
        }
    }

    /// Pick up where [`pause`](Self::pause) left off. Has no effect before `start`.
    pub fn resume(&mut self) {
        if self.started && self.running_since.is_none() {
            self.running_since = Some(self.clock.now());
        }
    }

    pub fn stop(&mut self) {
        self.pause();
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_secs
    }

    pub fn elapsed(&self) -> Duration {
        let live = self
            .running_since
            .map_or(Duration::ZERO, |since| self.clock.now().saturating_duration_since(since));
        self.banked + live
    }

    /// `max(0, total - whole seconds elapsed)`
    pub fn remaining_seconds(&self) -> u64 {
        self.total_secs.saturating_sub(self.elapsed().as_secs())
    }

    pub fn expired(&self) -> bool {
        self.remaining_seconds() == 0
    }

    /// Remaining time as `mm:ss`.
    pub fn remaining_formatted(&self) -> String {
        format_clock(self.remaining_seconds())
    }
}

/// Format a count of seconds as `mm:ss`.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
