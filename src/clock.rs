//! Time source used by the playback loop.
//!
//! The scheduler never reads `Instant` directly: it asks a [`Clock`] how long
//! the session has been running and asks the same clock to sleep, so tests can
//! drive a whole session with a clock that only moves when slept on.

use std::thread;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Time since the session started.
    fn elapsed(&self) -> Duration;

    /// Block for `d`.
    fn sleep(&self, d: Duration);
}

/// Wall clock anchored at the moment playback starts.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    session_start: Instant,
}

impl SystemClock {
    /// Capture the session start. Called once, right before audio starts.
    pub fn start() -> Self {
        Self {
            session_start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.session_start.elapsed()
    }

    fn sleep(&self, d: Duration) {
        thread::sleep(d);
    }
}
