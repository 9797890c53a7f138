//! Time sources and a leading-edge rate limiter.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic source of elapsed time.
///
/// The origin is arbitrary; only differences between readings matter.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from when the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a host can hand one clone to every
/// vertex and step them all at once.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> ManualClock {
        ManualClock::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Lets at most one call through per window.
///
/// The first call in a burst fires immediately; calls during the cool-down
/// are dropped and nothing fires when the window closes.
#[derive(Clone, Debug)]
pub struct Throttle<C: Clock = SystemClock> {
    window: Duration,
    last_fired: Option<Duration>,
    clock: C,
}

impl<C: Clock> Throttle<C> {
    pub fn new(window: Duration, clock: C) -> Throttle<C> {
        Throttle {
            window,
            last_fired: None,
            clock,
        }
    }

    /// Returns `true` if the caller may proceed, and starts a new window.
    pub fn try_fire(&mut self) -> bool {
        let now = self.clock.now();
        match self.last_fired {
            Some(last) if now.saturating_sub(last) < self.window => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}
