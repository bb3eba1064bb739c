//! Provider working hours.
//!
//! A [`WorkingWindow`] describes one day; [`WeeklyHours`] holds one window per
//! weekday, looked up by [`chrono::Weekday`].

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// Opening hours for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingWindow {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
    /// When false the provider takes no bookings that day, whatever `open`/`close` say.
    pub is_open: bool,
}

impl WorkingWindow {
    pub fn open(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self {
            open,
            close,
            is_open: true,
        }
    }

    pub fn closed() -> Self {
        Self {
            open: TimeOfDay::MIDNIGHT,
            close: TimeOfDay::MIDNIGHT,
            is_open: false,
        }
    }

    /// Closed, or open with `open` strictly before `close`.
    pub fn is_well_formed(&self) -> bool {
        !self.is_open || self.open < self.close
    }
}

impl Default for WorkingWindow {
    fn default() -> Self {
        Self::closed()
    }
}

/// Working hours for each day of the week. Missing days deserialize as closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyHours {
    pub monday: WorkingWindow,
    pub tuesday: WorkingWindow,
    pub wednesday: WorkingWindow,
    pub thursday: WorkingWindow,
    pub friday: WorkingWindow,
    pub saturday: WorkingWindow,
    pub sunday: WorkingWindow,
}

impl WeeklyHours {
    /// The same window on every listed weekday; all other days closed.
    pub fn uniform(window: WorkingWindow, days: &[Weekday]) -> Self {
        days.iter()
            .fold(Self::default(), |hours, day| hours.with_day(*day, window))
    }

    pub fn get(&self, day: Weekday) -> &WorkingWindow {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn set(&mut self, day: Weekday, window: WorkingWindow) {
        let slot = match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *slot = window;
    }

    pub fn with_day(mut self, day: Weekday, window: WorkingWindow) -> Self {
        self.set(day, window);
        self
    }

    /// The window that applies on `date`'s weekday.
    pub fn for_date(&self, date: NaiveDate) -> &WorkingWindow {
        self.get(date.weekday())
    }

    /// Iterate Monday through Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &WorkingWindow)> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .map(move |day| (day, self.get(day)))
    }
}
