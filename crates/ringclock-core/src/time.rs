//! Time values and the sources that produce them

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{Local, NaiveTime, Timelike};

use crate::{Error, Result};

/// Interval between two time ticks
pub const TIME_TICK: Duration = Duration::from_secs(1);

/// Wall-clock time of day, the only input the clock face needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    /// 0-23
    pub hours: u8,
    /// 0-59
    pub minutes: u8,
    /// 0-59
    pub seconds: u8,
}

impl ClockTime {
    /// Build a time of day, rejecting out-of-range fields
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(Error::InvalidTime(format!(
                "{:02}:{:02}:{:02}",
                hours, minutes, seconds
            )));
        }
        Ok(Self { hours, minutes, seconds })
    }

    pub const fn midnight() -> Self {
        Self { hours: 0, minutes: 0, seconds: 0 }
    }

    /// Seconds since midnight
    pub fn seconds_of_day(&self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }

    /// Build from seconds since midnight, wrapping at 24 hours
    pub fn from_seconds_of_day(total: u32) -> Self {
        let total = total % 86_400;
        Self {
            hours: (total / 3600) as u8,
            minutes: (total / 60 % 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    /// The time `secs` seconds later, wrapping past midnight
    pub fn plus_seconds(&self, secs: u32) -> Self {
        Self::from_seconds_of_day(self.seconds_of_day() + secs % 86_400)
    }

    /// The time `secs` seconds earlier, wrapping before midnight
    pub fn minus_seconds(&self, secs: u32) -> Self {
        Self::from_seconds_of_day(self.seconds_of_day() + 86_400 - secs % 86_400)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
            // Leap seconds are reported as 59 + nanos, so second() stays < 60
            seconds: time.second() as u8,
        }
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    /// Parse "HH:MM:SS" or "HH:MM"
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .map(ClockTime::from)
            .map_err(|e| Error::InvalidTime(format!("'{}': {}", s, e)))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Supplier of the current time, polled once per time tick
pub trait TimeSource {
    fn now(&mut self) -> ClockTime;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&mut self) -> ClockTime {
        Local::now().time().into()
    }
}

/// Clock that starts at a fixed time and advances one second per poll
///
/// The first poll returns the start time itself.
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    next: ClockTime,
}

impl SimulatedClock {
    pub fn starting_at(start: ClockTime) -> Self {
        Self { next: start }
    }
}

impl TimeSource for SimulatedClock {
    fn now(&mut self) -> ClockTime {
        let current = self.next;
        self.next = current.plus_seconds(1);
        current
    }
}
