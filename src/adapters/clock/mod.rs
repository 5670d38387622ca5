//! Clock implementations.
//!
//! - `SystemClock` - wall time, the only place the application reads it
//! - `FixedClock` - one instant, movable by hand
//! - `SteppedClock` - advances by a fixed step after every read

use chrono::{Duration, Utc};
use std::sync::Mutex;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Reads the current UTC time from the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_datetime(Utc::now())
    }
}

/// Returns the same instant on every call until [`FixedClock::set`] moves it.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<Timestamp>,
}

impl FixedClock {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: Timestamp) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Returns `start` on the first read, then `start + step`, `start + 2 * step`...
#[derive(Debug)]
pub struct SteppedClock {
    next: Mutex<Timestamp>,
    step: Duration,
}

impl SteppedClock {
    pub fn new(start: Timestamp, step: Duration) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }
}

impl Clock for SteppedClock {
    fn now(&self) -> Timestamp {
        let mut next = self.next.lock().unwrap_or_else(|e| e.into_inner());
        let now = *next;
        *next = now.plus(self.step);
        now
    }
}
