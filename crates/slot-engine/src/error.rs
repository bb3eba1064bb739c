//! Error types for slot-engine operations.

use thiserror::Error;

use crate::time::TimeOfDay;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid time range: {start}-{end} (start must be before end)")]
    InvalidRange { start: TimeOfDay, end: TimeOfDay },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The requested range overlaps an occupied slot.
    #[error("Slot {start}-{end} is unavailable")]
    SlotUnavailable { start: TimeOfDay, end: TimeOfDay },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
