//! # slot-engine
//!
//! Appointment slot generation and booking conflict detection.
//!
//! Turns a provider's working hours for a day into fixed-length bookable slots, and
//! decides whether a proposed booking overlaps slots that are already taken or
//! blocked. Everything here is a pure function over value types: no I/O, no shared
//! state, safe to call from any number of concurrent requests.
//!
//! ## Modules
//!
//! - [`time`] — `TimeOfDay`, minute-resolution wall-clock time
//! - [`schedule`] — Per-day working windows and weekly hours
//! - [`slots`] — Fixed-length slot generation
//! - [`conflict`] — Overlap checks against occupied slot records
//! - [`availability`] — Free/busy listing and booking validation
//! - [`config`] — Default slot length and working hours
//! - [`error`] — Error types

pub mod availability;
pub mod config;
pub mod conflict;
pub mod error;
pub mod schedule;
pub mod slots;
pub mod time;

pub use availability::{ensure_bookable, free_slots, list_availability, SlotStatus};
pub use config::SlotConfig;
pub use conflict::{find_conflicting, has_conflict, ExistingSlotRecord};
pub use error::SlotError;
pub use schedule::{WeeklyHours, WorkingWindow};
pub use slots::{generate_slots, Slot, DEFAULT_SLOT_MINUTES};
pub use time::TimeOfDay;
