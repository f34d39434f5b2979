//! Wall-clock injection for time-of-day bucketing.

use chrono::{Local, Timelike};
use kindbite_engine::TimeOfDay;

/// Source of the local hour used for time-of-day greetings.
///
/// Injected so tests (and demos) can pin the bucket instead of depending
/// on when they happen to run.
pub trait Clock: Send + Sync {
    /// Local hour in `0..24`.
    fn local_hour(&self) -> u32;

    /// Time-of-day bucket for the current local hour.
    fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.local_hour())
    }
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// A clock pinned to a fixed hour.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    hour: u32,
}

impl FixedClock {
    /// Clock that always reports the given hour (wrapped into `0..24`).
    pub fn at_hour(hour: u32) -> Self {
        Self { hour: hour % 24 }
    }
}

impl Clock for FixedClock {
    fn local_hour(&self) -> u32 {
        self.hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_buckets() {
        assert_eq!(FixedClock::at_hour(8).time_of_day(), TimeOfDay::Morning);
        assert_eq!(FixedClock::at_hour(14).time_of_day(), TimeOfDay::Afternoon);
        assert_eq!(FixedClock::at_hour(21).time_of_day(), TimeOfDay::Evening);
    }

    #[test]
    fn test_fixed_clock_wraps_hours() {
        assert_eq!(FixedClock::at_hour(25).local_hour(), 1);
    }

    #[test]
    fn test_system_clock_hour_in_range() {
        assert!(SystemClock.local_hour() < 24);
    }
}
