// src/utils/clock.rs

use chrono::NaiveDateTime;

/// Source of "now" for the time gate and the daily seed.
pub trait Clock: Send + Sync {
    /// Current server-local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the server's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
