//! Wall-clock seam
//!
//! The monitor re-samples the clock on every evaluation; it never caches a
//! reading across the polling interval.

use chrono::Timelike;

/// Source of the current local time of day
pub trait Clock: Send + Sync {
    /// Minutes since local midnight
    fn minutes_now(&self) -> u32;
}

/// System local time
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn minutes_now(&self) -> u32 {
        let now = chrono::Local::now();
        now.hour() * 60 + now.minute()
    }
}
