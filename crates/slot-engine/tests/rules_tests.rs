//! Tests for configuration deserialization and the fallback defaults.

use slot_engine::rules::{parse_clock, parse_weekday};
use slot_engine::{AvailabilityRules, Blackout, ExistingBooking, PoolingStrategy, SlotError};

#[test]
fn missing_optional_fields_take_observed_defaults() {
    // Buffers default to 0, the per-day cap to 10, blackouts to none, and
    // pooling to round_robin.
    let json = r#"{
        "timezone": "America/New_York",
        "slot_minutes": 30,
        "windows": [
            { "host": "alice", "days": ["Monday"], "start": "09:00", "end": "10:00" }
        ]
    }"#;

    let rules: AvailabilityRules = serde_json::from_str(json).unwrap();

    assert_eq!(rules.buffer_before, 0);
    assert_eq!(rules.buffer_after, 0);
    assert_eq!(rules.max_per_day_per_host, 10);
    assert!(rules.blackouts.is_empty());
    assert_eq!(rules.pooling, PoolingStrategy::RoundRobin);
}

#[test]
fn blackouts_accept_single_dates_and_ranges() {
    let json = r#"{
        "timezone": "UTC",
        "slot_minutes": 60,
        "windows": [],
        "blackouts": ["2024-07-04", ["2024-12-24", "2024-12-26"]]
    }"#;

    let rules: AvailabilityRules = serde_json::from_str(json).unwrap();

    assert_eq!(
        rules.blackouts,
        vec![
            Blackout::Date("2024-07-04".to_string()),
            Blackout::Range("2024-12-24".to_string(), "2024-12-26".to_string()),
        ]
    );
}

#[test]
fn blackout_matching_is_inclusive_lexicographic() {
    let date = Blackout::Date("2024-07-04".to_string());
    assert!(date.matches("2024-07-04"));
    assert!(!date.matches("2024-07-05"));

    let range = Blackout::Range("2024-12-24".to_string(), "2024-12-26".to_string());
    assert!(range.matches("2024-12-24"), "range start is inclusive");
    assert!(range.matches("2024-12-25"));
    assert!(range.matches("2024-12-26"), "range end is inclusive");
    assert!(!range.matches("2024-12-23"));
    assert!(!range.matches("2024-12-27"));
}

#[test]
fn pooling_deserializes_snake_case() {
    let rr: PoolingStrategy = serde_json::from_str(r#""round_robin""#).unwrap();
    assert_eq!(rr, PoolingStrategy::RoundRobin);

    let ll: PoolingStrategy = serde_json::from_str(r#""least_loaded""#).unwrap();
    assert_eq!(ll, PoolingStrategy::LeastLoaded);
}

#[test]
fn booking_without_host_deserializes_to_none() {
    let json = r#"{
        "start_time": "2024-07-01T09:00:00Z",
        "end_time": "2024-07-01T10:00:00Z"
    }"#;

    let booking: ExistingBooking = serde_json::from_str(json).unwrap();

    assert_eq!(booking.host, None);
}

#[test]
fn clock_parsing_accepts_hh_mm_only() {
    assert_eq!(
        parse_clock("09:05").unwrap(),
        chrono::NaiveTime::from_hms_opt(9, 5, 0).unwrap()
    );
    assert!(matches!(
        parse_clock("9am"),
        Err(SlotError::InvalidClockTime(_))
    ));
    assert!(matches!(
        parse_clock("25:00"),
        Err(SlotError::InvalidClockTime(_))
    ));
}

#[test]
fn weekday_parsing_accepts_names_and_abbreviations() {
    assert_eq!(parse_weekday("Monday").unwrap(), chrono::Weekday::Mon);
    assert_eq!(parse_weekday("monday").unwrap(), chrono::Weekday::Mon);
    assert_eq!(parse_weekday("TUE").unwrap(), chrono::Weekday::Tue);
    assert!(matches!(
        parse_weekday("Funday"),
        Err(SlotError::InvalidWeekday(_))
    ));
}

#[test]
fn time_slots_serialize_as_rfc3339_instants() {
    use chrono::{TimeZone, Utc};
    let slot = slot_engine::TimeSlot {
        start: Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap(),
        host: "alice".to_string(),
    };

    let json = serde_json::to_string(&slot).unwrap();

    assert!(json.contains("2024-07-01T09:00:00Z"));
    assert!(json.contains("2024-07-01T09:30:00Z"));
    assert!(json.contains(r#""host":"alice""#));
}
