//! Fixed-length slot generation from a day's working window.
//!
//! Walks a cursor from the window's opening time, emitting back-to-back slots of the
//! requested length. A trailing period shorter than one slot is dropped.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, SlotError};
use crate::schedule::WorkingWindow;
use crate::time::TimeOfDay;

/// Slot length used when nothing else is configured.
pub const DEFAULT_SLOT_MINUTES: u32 = 30;

/// A half-open `[start, end)` interval within one day.
///
/// Deserialization goes through [`Slot::new`], so `start < end` holds for parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSlot")]
pub struct Slot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

#[derive(Deserialize)]
struct RawSlot {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawSlot> for Slot {
    type Error = SlotError;

    fn try_from(raw: RawSlot) -> Result<Self> {
        Slot::new(raw.start, raw.end)
    }
}

impl Slot {
    /// # Errors
    /// Returns `SlotError::InvalidRange` unless `start < end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(SlotError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A booking starting at `start` that runs for the sum of the given service durations.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidRange` when the services add up to zero minutes or the
    /// booking would run past midnight.
    pub fn for_services(start: TimeOfDay, service_minutes: &[u32]) -> Result<Self> {
        let total = service_minutes
            .iter()
            .try_fold(0u32, |acc, m| acc.checked_add(*m));
        let end = total
            .and_then(|t| start.checked_add_minutes(t))
            .ok_or(SlotError::InvalidRange {
                start,
                end: TimeOfDay::MIDNIGHT,
            })?;
        Self::new(start, end)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.start.minutes_until(self.end)
    }
}

/// Generate the candidate slots for `date` within `window`.
///
/// Only the calendar day of `date` matters. Slots are contiguous, exactly
/// `slot_minutes` long and fully inside `[open, close]`. A closed window, a window
/// with `open >= close`, or a zero slot length yields no slots.
pub fn generate_slots(date: NaiveDate, window: &WorkingWindow, slot_minutes: u32) -> Vec<Slot> {
    if !window.is_open || slot_minutes == 0 {
        return Vec::new();
    }

    let step = Duration::minutes(i64::from(slot_minutes));
    let close = window.close.on(date);
    let mut cursor = window.open.on(date);
    let mut slots = Vec::new();

    while cursor < close {
        let end = match cursor.checked_add_signed(step) {
            Some(end) if end <= close => end,
            _ => break,
        };
        slots.push(Slot {
            start: cursor.time().into(),
            end: end.time().into(),
        });
        cursor = end;
    }

    trace!(
        %date,
        open = %window.open,
        close = %window.close,
        slot_minutes,
        count = slots.len(),
        "generated slots"
    );

    slots
}
