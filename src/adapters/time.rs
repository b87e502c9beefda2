//! System clock adapter.
//!
//! Monotonic milliseconds from `std::time::Instant`, wall-clock time from
//! `chrono::Local` (used only to timestamp mood records).

use std::time::{Duration, Instant};

use chrono::Local;

use crate::app::ports::{Clock, Now};

pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds since construction.
    pub fn uptime_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Now {
        Now {
            mono_ms: self.uptime_ms(),
            wall: Local::now().naive_local(),
        }
    }

    fn sleep_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}
