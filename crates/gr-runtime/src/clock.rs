//! Wall-clock time of day, for games that care what time it is.

use std::fmt;

use chrono::{Local, NaiveTime, Timelike};

/// A wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// Second, 0-59.
    pub second: u32,
}

impl TimeOfDay {
    /// Create a time of day. Returns `None` if any field is out of range.
    pub fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self::from)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            // leap seconds show up as nanosecond overflow, not second 60
            second: time.second(),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Source of the current time of day.
pub trait ClockSource {
    /// The current time of day.
    fn current_time(&self) -> TimeOfDay;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl ClockSource for LocalClock {
    fn current_time(&self) -> TimeOfDay {
        TimeOfDay::from(Local::now().time())
    }
}

/// A clock stopped at a fixed time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub TimeOfDay);

impl ClockSource for FixedClock {
    fn current_time(&self) -> TimeOfDay {
        self.0
    }
}
