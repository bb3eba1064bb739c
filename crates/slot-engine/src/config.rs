//! Slot configuration: default slot length and weekly working hours.
//!
//! Loaded by callers from whatever source they use (file, environment) and passed
//! into the generator explicitly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::schedule::{WeeklyHours, WorkingWindow};
use crate::slots::{generate_slots, Slot, DEFAULT_SLOT_MINUTES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Length of generated slots, in minutes.
    pub default_slot_minutes: u32,
    pub working_hours: WeeklyHours,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            default_slot_minutes: DEFAULT_SLOT_MINUTES,
            working_hours: WeeklyHours::default(),
        }
    }
}

impl SlotConfig {
    pub fn new(working_hours: WeeklyHours) -> Self {
        Self {
            working_hours,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject settings the generator would silently turn into "no slots".
    ///
    /// # Errors
    /// Returns `SlotError::InvalidConfig` for a zero slot length or an open day whose
    /// opening time is not before its closing time.
    pub fn validate(&self) -> Result<()> {
        if self.default_slot_minutes == 0 {
            return Err(SlotError::InvalidConfig(
                "default_slot_minutes must be positive".to_string(),
            ));
        }
        if let Some((day, window)) = self
            .working_hours
            .iter()
            .find(|(_, w)| !w.is_well_formed())
        {
            return Err(SlotError::InvalidConfig(format!(
                "{} opens at {} but closes at {}",
                day, window.open, window.close
            )));
        }
        Ok(())
    }

    /// The working window for `date`'s weekday.
    pub fn window_for(&self, date: NaiveDate) -> &WorkingWindow {
        self.working_hours.for_date(date)
    }

    /// Candidate slots for `date` using the configured hours and slot length.
    pub fn slots_for(&self, date: NaiveDate) -> Vec<Slot> {
        generate_slots(date, self.window_for(date), self.default_slot_minutes)
    }
}
