//! Free/busy listing and booking validation.
//!
//! Combines [`generate_slots`] with [`has_conflict`]: every candidate slot of the day
//! is marked available or not against the day's existing records, and a booking is
//! re-checked against the same records before it is committed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conflict::{has_conflict, ExistingSlotRecord};
use crate::error::{Result, SlotError};
use crate::schedule::WorkingWindow;
use crate::slots::{generate_slots, Slot};
use crate::time::TimeOfDay;

/// A candidate slot with its booking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    #[serde(flatten)]
    pub slot: Slot,
    pub available: bool,
}

/// Every candidate slot for `date`, each marked free or busy against `records`.
///
/// `records` must belong to `date`.
pub fn list_availability(
    date: NaiveDate,
    window: &WorkingWindow,
    slot_minutes: u32,
    records: &[ExistingSlotRecord],
) -> Vec<SlotStatus> {
    let statuses: Vec<SlotStatus> = generate_slots(date, window, slot_minutes)
        .into_iter()
        .map(|slot| SlotStatus {
            slot,
            available: !has_conflict(slot.start, slot.end, records),
        })
        .collect();

    debug!(
        %date,
        total = statuses.len(),
        free = statuses.iter().filter(|s| s.available).count(),
        "listed availability"
    );

    statuses
}

/// Only the bookable slots for `date`.
pub fn free_slots(
    date: NaiveDate,
    window: &WorkingWindow,
    slot_minutes: u32,
    records: &[ExistingSlotRecord],
) -> Vec<Slot> {
    list_availability(date, window, slot_minutes, records)
        .into_iter()
        .filter(|s| s.available)
        .map(|s| s.slot)
        .collect()
}

/// Re-validate a booking of `[start, end)` against the day's records.
///
/// # Errors
/// Returns `SlotError::InvalidRange` if `start >= end`, and
/// `SlotError::SlotUnavailable` if the range overlaps an occupied record.
pub fn ensure_bookable(
    start: TimeOfDay,
    end: TimeOfDay,
    records: &[ExistingSlotRecord],
) -> Result<()> {
    if start >= end {
        return Err(SlotError::InvalidRange { start, end });
    }
    if has_conflict(start, end, records) {
        debug!(%start, %end, "booking rejected: slot unavailable");
        return Err(SlotError::SlotUnavailable { start, end });
    }
    debug!(%start, %end, "booking accepted");
    Ok(())
}
