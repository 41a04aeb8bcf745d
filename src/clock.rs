//! Wall-clock abstraction used to place "now" inside the rise/set window.
//!
//! The engine reads the clock when it lays out or starts a run; animation
//! ticks carry their own timestamps. Swapping in [`ManualClock`] makes the
//! whole engine deterministic for tests and time-lapse previews.

use std::cell::Cell;

use chrono::Utc;

pub trait Clock {
    /// Current instant in epoch milliseconds.
    fn now_ms(&self) -> i64;
}

/// Real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Settable clock for tests and simulated playback.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Cell<i64>,
}

impl ManualClock {
    #[must_use]
    pub fn new(now_ms: i64) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.set(now_ms);
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now_ms.set(self.now_ms.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{Clock, ManualClock};

    #[test]
    fn shared_manual_clock_sees_advances() {
        let clock = Rc::new(ManualClock::new(1_000));
        let shared = Rc::clone(&clock);

        clock.advance(250);
        assert_eq!(shared.now_ms(), 1_250);

        clock.advance(i64::MAX);
        assert_eq!(shared.now_ms(), i64::MAX);
    }
}
