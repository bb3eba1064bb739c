//! WASM bindings for slot-engine.
//!
//! Exposes slot generation, conflict detection, and availability listing to
//! JavaScript via `wasm-bindgen`. Complex values cross the boundary as JSON strings;
//! times are `"HH:MM"` strings and dates are `"YYYY-MM-DD"`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use slot_engine::{ExistingSlotRecord, Slot, TimeOfDay, WorkingWindow};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Input parsing helpers
// ---------------------------------------------------------------------------

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn parse_time(s: &str) -> Result<TimeOfDay, JsValue> {
    s.parse().map_err(|e: slot_engine::SlotError| JsValue::from_str(&e.to_string()))
}

/// Parse a `{open, close, is_open}` object.
fn parse_window_json(json: &str) -> Result<WorkingWindow, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid working window JSON: {}", e)))
}

/// Parse a JSON array of `{start, end, is_available, is_blocked, booking_id}` objects.
fn parse_records_json(json: &str) -> Result<Vec<ExistingSlotRecord>, JsValue> {
    ExistingSlotRecord::parse_list(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid records JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate the fixed-length slots for a date within a working window.
///
/// Returns a JSON array of `{start, end}` objects. A closed window yields `[]`.
///
/// # Arguments
/// - `date` -- Calendar date (e.g., "2026-03-16")
/// - `window_json` -- `{"open": "09:00", "close": "17:00", "is_open": true}`
/// - `slot_minutes` -- Slot length in minutes
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots(date: &str, window_json: &str, slot_minutes: u32) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let window = parse_window_json(window_json)?;
    to_json(&slot_engine::generate_slots(date, &window, slot_minutes))
}

/// Whether the range `[start, end)` overlaps any occupied record.
///
/// `records_json` must be a JSON array of slot records for the same day. Errors when
/// `start` is not before `end`.
#[wasm_bindgen(js_name = "hasConflict")]
pub fn has_conflict(start: &str, end: &str, records_json: &str) -> Result<bool, JsValue> {
    let proposed = Slot::new(parse_time(start)?, parse_time(end)?)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let records = parse_records_json(records_json)?;
    Ok(slot_engine::has_conflict(proposed.start, proposed.end, &records))
}

/// List the day's slots, each marked available or not.
///
/// Returns a JSON array of `{start, end, available}` objects.
#[wasm_bindgen(js_name = "listAvailability")]
pub fn list_availability(
    date: &str,
    window_json: &str,
    slot_minutes: u32,
    records_json: &str,
) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let window = parse_window_json(window_json)?;
    let records = parse_records_json(records_json)?;
    to_json(&slot_engine::list_availability(
        date,
        &window,
        slot_minutes,
        &records,
    ))
}
