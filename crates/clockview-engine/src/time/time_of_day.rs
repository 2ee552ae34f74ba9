use std::fmt;

use chrono::Timelike;

/// Error returned by [`TimeOfDay::new`] when a component is out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOfDayError {
    pub field: &'static str,
    pub value: u32,
}

impl fmt::Display for TimeOfDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "time of day: {} out of range: {}", self.field, self.value)
    }
}

impl std::error::Error for TimeOfDayError {}

/// Wall-clock time of day in 12-hour form.
///
/// Invariants: `hour ∈ [0, 11]`, `minute ∈ [0, 59]`, `second ∈ [0, 59]`.
/// Fields are private so the invariants hold for every value in circulation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0, second: 0 };

    /// Checked constructor. `hour` must already be in 12-hour form.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeOfDayError> {
        if hour > 11 {
            return Err(TimeOfDayError { field: "hour", value: hour });
        }
        if minute > 59 {
            return Err(TimeOfDayError { field: "minute", value: minute });
        }
        if second > 59 {
            return Err(TimeOfDayError { field: "second", value: second });
        }
        Ok(Self { hour: hour as u8, minute: minute as u8, second: second as u8 })
    }

    /// Builds from a 24-hour reading, folding the hour into 12-hour form.
    pub fn from_hms_24(hour: u32, minute: u32, second: u32) -> Result<Self, TimeOfDayError> {
        if hour > 23 {
            return Err(TimeOfDayError { field: "hour", value: hour });
        }
        Self::new(hour % 12, minute, second)
    }

    /// Samples any `chrono` time-like value.
    ///
    /// chrono encodes leap seconds in `nanosecond()`, so `second()` is already
    /// in `[0, 59]`; sub-second precision is dropped.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self {
            hour: (t.hour() % 12) as u8,
            minute: t.minute() as u8,
            second: t.second() as u8,
        }
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.hour as u32
    }

    #[inline]
    pub fn minute(self) -> u32 {
        self.minute as u32
    }

    #[inline]
    pub fn second(self) -> u32 {
        self.second as u32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn new_accepts_bounds() {
        let t = TimeOfDay::new(11, 59, 59).unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (11, 59, 59));
        assert_eq!(TimeOfDay::new(0, 0, 0).unwrap(), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn new_rejects_each_field() {
        assert_eq!(TimeOfDay::new(12, 0, 0).unwrap_err().field, "hour");
        assert_eq!(TimeOfDay::new(0, 60, 0).unwrap_err().field, "minute");
        assert_eq!(TimeOfDay::new(0, 0, 60).unwrap_err().field, "second");
    }

    #[test]
    fn twenty_four_hour_input_folds() {
        assert_eq!(TimeOfDay::from_hms_24(15, 0, 0).unwrap().hour(), 3);
        assert_eq!(TimeOfDay::from_hms_24(12, 30, 0).unwrap().hour(), 0);
        assert!(TimeOfDay::from_hms_24(24, 0, 0).is_err());
    }

    #[test]
    fn from_chrono_time() {
        let t = NaiveTime::from_hms_opt(23, 45, 7).unwrap();
        let tod = TimeOfDay::from_timelike(&t);
        assert_eq!((tod.hour(), tod.minute(), tod.second()), (11, 45, 7));
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeOfDay::new(3, 4, 5).unwrap().to_string(), "03:04:05");
    }
}
