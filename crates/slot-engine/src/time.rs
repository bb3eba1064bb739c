//! Minute-resolution wall-clock times.
//!
//! A [`TimeOfDay`] is a local time within a single calendar day, stored as minutes
//! since midnight. It carries no timezone: working hours and bookings are both
//! expressed on the provider's own clock.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time truncated to the minute, in `00:00..=23:59`.
///
/// Serialized as an `"HH:MM"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build a time from an hour (0-23) and minute (0-59).
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(TimeOfDay((hour * 60 + minute) as u16))
    }

    /// Build a time from minutes since midnight (0-1439).
    pub fn from_minutes(minutes: u32) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY as u32 {
            return Err(SlotError::InvalidTime(format!(
                "{} minutes past midnight",
                minutes
            )));
        }
        Ok(TimeOfDay(minutes as u16))
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0 / 60)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0 % 60)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// Returns the time `minutes` later, or `None` if that crosses midnight.
    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        let total = self.minutes().checked_add(minutes)?;
        Self::from_minutes(total).ok()
    }

    /// Minutes from `self` until `later`; zero when `later` is not after `self`.
    pub fn minutes_until(self, later: TimeOfDay) -> u32 {
        later.minutes().saturating_sub(self.minutes())
    }

    /// Combine with a calendar date into a naive local datetime.
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.into())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    /// Parses `HH:MM` or `HH:MM:SS`; seconds are truncated.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(TimeOfDay::from)
            .map_err(|_| SlotError::InvalidTime(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SlotError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        TimeOfDay((t.hour() * 60 + t.minute()) as u16)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(t: TimeOfDay) -> Self {
        // hour/minute are always in range by construction.
        NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}
