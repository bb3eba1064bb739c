//! Tests for `TimeOfDay` construction, parsing and formatting.

use chrono::{NaiveDate, NaiveTime};
use slot_engine::{SlotError, TimeOfDay};

#[test]
fn parses_hours_and_minutes() {
    let t: TimeOfDay = "09:05".parse().unwrap();
    assert_eq!(t.hour(), 9);
    assert_eq!(t.minute(), 5);
    assert_eq!(t.minutes(), 545);
}

#[test]
fn parses_and_truncates_seconds() {
    let t: TimeOfDay = "14:30:59".parse().unwrap();
    assert_eq!(t, TimeOfDay::new(14, 30).unwrap());
}

#[test]
fn displays_zero_padded() {
    assert_eq!(TimeOfDay::new(7, 0).unwrap().to_string(), "07:00");
    assert_eq!(TimeOfDay::new(23, 59).unwrap().to_string(), "23:59");
}

#[test]
fn rejects_out_of_range_values() {
    assert!(matches!(TimeOfDay::new(24, 0), Err(SlotError::InvalidTime(_))));
    assert!(matches!(TimeOfDay::new(10, 60), Err(SlotError::InvalidTime(_))));
    assert!(matches!(
        TimeOfDay::from_minutes(1440),
        Err(SlotError::InvalidTime(_))
    ));
    assert!("25:00".parse::<TimeOfDay>().is_err());
    assert!("nine".parse::<TimeOfDay>().is_err());
    assert!("".parse::<TimeOfDay>().is_err());
}

#[test]
fn add_minutes_stops_at_midnight() {
    let t = TimeOfDay::new(23, 0).unwrap();
    assert_eq!(t.checked_add_minutes(59), Some(TimeOfDay::new(23, 59).unwrap()));
    assert_eq!(t.checked_add_minutes(60), None);
}

#[test]
fn minutes_until_saturates() {
    let nine = TimeOfDay::new(9, 0).unwrap();
    let ten = TimeOfDay::new(10, 0).unwrap();
    assert_eq!(nine.minutes_until(ten), 60);
    assert_eq!(ten.minutes_until(nine), 0);
}

#[test]
fn orders_chronologically() {
    let a: TimeOfDay = "08:59".parse().unwrap();
    let b: TimeOfDay = "09:00".parse().unwrap();
    assert!(a < b);
}

#[test]
fn converts_to_and_from_naive_time() {
    let naive = NaiveTime::from_hms_opt(16, 45, 12).unwrap();
    let t = TimeOfDay::from(naive);
    assert_eq!(t.to_string(), "16:45");
    assert_eq!(NaiveTime::from(t), NaiveTime::from_hms_opt(16, 45, 0).unwrap());
}

#[test]
fn combines_with_date() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
    let dt = TimeOfDay::new(9, 30).unwrap().on(date);
    assert_eq!(dt.to_string(), "2026-03-16 09:30:00");
}

#[test]
fn serializes_as_string() {
    let t = TimeOfDay::new(9, 0).unwrap();
    assert_eq!(serde_json::to_string(&t).unwrap(), r#""09:00""#);
    let back: TimeOfDay = serde_json::from_str(r#""17:15""#).unwrap();
    assert_eq!(back, TimeOfDay::new(17, 15).unwrap());
    assert!(serde_json::from_str::<TimeOfDay>(r#""17:75""#).is_err());
}
