//! Detect whether a proposed booking overlaps occupied slots.
//!
//! Only records that are unavailable or explicitly blocked take part. Intervals are
//! half-open, so a booking may start exactly when an occupied slot ends (and vice
//! versa) without conflicting.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::slots::Slot;
use crate::time::TimeOfDay;

/// An existing slot for the day being checked, as stored by the booking system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingSlotRecord {
    #[serde(flatten)]
    pub slot: Slot,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default)]
    pub is_blocked: bool,
    /// The booking occupying this slot, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
}

fn default_available() -> bool {
    true
}

impl ExistingSlotRecord {
    /// A slot taken by a booking.
    pub fn booked(slot: Slot, booking_id: impl Into<String>) -> Self {
        Self {
            slot,
            is_available: false,
            is_blocked: false,
            booking_id: Some(booking_id.into()),
        }
    }

    /// A slot the provider has blocked out.
    pub fn blocked(slot: Slot) -> Self {
        Self {
            slot,
            is_available: true,
            is_blocked: true,
            booking_id: None,
        }
    }

    /// An open slot; never a source of conflicts.
    pub fn available(slot: Slot) -> Self {
        Self {
            slot,
            is_available: true,
            is_blocked: false,
            booking_id: None,
        }
    }

    /// Whether this record blocks other bookings.
    pub fn is_occupied(&self) -> bool {
        !self.is_available || self.is_blocked
    }

    /// Parse a JSON array of records.
    pub fn parse_list(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The three overlap conditions between a proposed `[start, end)` and an occupied
/// `[c, d)`: the start falls inside it, the end falls inside it, or the proposal
/// covers it entirely.
fn overlaps(start: TimeOfDay, end: TimeOfDay, occupied: &Slot) -> bool {
    let (c, d) = (occupied.start, occupied.end);
    (c <= start && start < d) || (c < end && end <= d) || (start <= c && end >= d)
}

/// Whether `[start, end)` overlaps any occupied record.
///
/// Records must already be filtered to the same calendar day. Available, unblocked
/// records are ignored regardless of their times.
pub fn has_conflict(start: TimeOfDay, end: TimeOfDay, records: &[ExistingSlotRecord]) -> bool {
    records
        .iter()
        .any(|r| r.is_occupied() && overlaps(start, end, &r.slot))
}

/// All occupied records that `[start, end)` overlaps, in input order.
pub fn find_conflicting(
    start: TimeOfDay,
    end: TimeOfDay,
    records: &[ExistingSlotRecord],
) -> Vec<&ExistingSlotRecord> {
    records
        .iter()
        .filter(|r| r.is_occupied() && overlaps(start, end, &r.slot))
        .collect()
}
