use std::sync::{Mutex, PoisonError};

use chrono::Local;

use super::TimeOfDay;

/// Supplies the current wall-clock time of day.
///
/// Reading the time must be non-blocking: it runs on the tick path.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> TimeOfDay;
}

/// Local wall clock of the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl SystemTimeSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_timelike(&Local::now())
    }
}

/// Time source pinned to a settable value.
///
/// Used by tests and by hosts that drive the clock from their own notion of
/// time (replays, screenshots).
#[derive(Debug, Default)]
pub struct FixedTimeSource {
    time: Mutex<TimeOfDay>,
}

impl FixedTimeSource {
    pub fn new(time: TimeOfDay) -> Self {
        Self { time: Mutex::new(time) }
    }

    /// Replaces the reported time; the next `now()` observes it.
    pub fn set(&self, time: TimeOfDay) {
        *self.time.lock().unwrap_or_else(PoisonError::into_inner) = time;
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> TimeOfDay {
        *self.time.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_source_reports_latest_value() {
        let src = FixedTimeSource::new(TimeOfDay::MIDNIGHT);
        assert_eq!(src.now(), TimeOfDay::MIDNIGHT);

        let later = TimeOfDay::new(3, 15, 42).unwrap();
        src.set(later);
        assert_eq!(src.now(), later);
    }

    #[test]
    fn system_source_is_in_range() {
        let t = SystemTimeSource::new().now();
        assert!(t.hour() < 12);
        assert!(t.minute() < 60);
        assert!(t.second() < 60);
    }
}
