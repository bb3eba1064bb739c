//! Tests for free/busy listing and booking validation.

use chrono::NaiveDate;
use slot_engine::{
    ensure_bookable, free_slots, list_availability, ExistingSlotRecord, Slot, SlotError,
    TimeOfDay, WorkingWindow,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn slot(start: &str, end: &str) -> Slot {
    Slot::new(t(start), t(end)).unwrap()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 17).unwrap()
}

fn morning() -> WorkingWindow {
    WorkingWindow::open(t("09:00"), t("12:00"))
}

// ── Listing ─────────────────────────────────────────────────────────────────

#[test]
fn no_records_means_every_slot_is_free() {
    let statuses = list_availability(date(), &morning(), 30, &[]);
    assert_eq!(statuses.len(), 6);
    assert!(statuses.iter().all(|s| s.available));
}

#[test]
fn booked_and_blocked_slots_are_marked_busy() {
    let records = vec![
        ExistingSlotRecord::booked(slot("09:30", "10:00"), "b-1"),
        // A 45-minute two-service booking spans two generated slots.
        ExistingSlotRecord::booked(slot("10:30", "11:15"), "b-2"),
        ExistingSlotRecord::blocked(slot("11:30", "12:00")),
    ];

    let statuses = list_availability(date(), &morning(), 30, &records);
    let flags: Vec<bool> = statuses.iter().map(|s| s.available).collect();

    // 09:00 09:30 10:00 10:30 11:00 11:30
    assert_eq!(flags, vec![true, false, true, false, false, false]);
}

#[test]
fn available_records_do_not_hide_slots() {
    let records = vec![ExistingSlotRecord::available(slot("09:00", "12:00"))];
    assert_eq!(free_slots(date(), &morning(), 30, &records).len(), 6);
}

#[test]
fn free_slots_keeps_only_available_ones() {
    let records = vec![ExistingSlotRecord::booked(slot("09:00", "10:00"), "b-1")];

    let free = free_slots(date(), &morning(), 30, &records);

    assert_eq!(free.len(), 4);
    assert_eq!(free[0], slot("10:00", "10:30"));
}

#[test]
fn closed_day_lists_nothing() {
    let records = vec![ExistingSlotRecord::booked(slot("09:00", "10:00"), "b-1")];
    assert!(list_availability(date(), &WorkingWindow::closed(), 30, &records).is_empty());
}

#[test]
fn status_serializes_flat() {
    let statuses = list_availability(date(), &WorkingWindow::open(t("09:00"), t("09:30")), 30, &[]);
    let json = serde_json::to_string(&statuses).unwrap();
    assert_eq!(json, r#"[{"start":"09:00","end":"09:30","available":true}]"#);
}

// ── Booking validation ──────────────────────────────────────────────────────

#[test]
fn free_range_is_bookable() {
    let records = vec![ExistingSlotRecord::booked(slot("10:00", "10:30"), "b-1")];
    assert!(ensure_bookable(t("10:30"), t("11:00"), &records).is_ok());
    assert!(ensure_bookable(t("09:30"), t("10:00"), &records).is_ok());
}

#[test]
fn overlapping_range_is_unavailable() {
    let records = vec![ExistingSlotRecord::blocked(slot("10:00", "11:00"))];

    let err = ensure_bookable(t("10:30"), t("10:45"), &records).unwrap_err();

    assert!(matches!(err, SlotError::SlotUnavailable { .. }));
    assert_eq!(err.to_string(), "Slot 10:30-10:45 is unavailable");
}

#[test]
fn inverted_range_is_rejected_before_conflict_check() {
    let err = ensure_bookable(t("11:00"), t("10:00"), &[]).unwrap_err();
    assert!(matches!(err, SlotError::InvalidRange { .. }));
}
