//! WASM bindings for slot-engine.
//!
//! Exposes availability-slot generation to JavaScript via `wasm-bindgen`.
//! All complex types are passed as JSON strings: rules and bookings come in
//! as JSON, slots go out as JSON with RFC 3339 instants.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use slot_engine::{AvailabilityRules, ExistingBooking, TimeSlot};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct TimeSlotDto {
    start: String,
    end: String,
    host: String,
}

impl From<&TimeSlot> for TimeSlotDto {
    fn from(s: &TimeSlot) -> Self {
        Self {
            start: s.start.to_rfc3339(),
            end: s.end.to_rfc3339(),
            host: s.host.clone(),
        }
    }
}

#[derive(Serialize)]
struct QuoteDto {
    resource_id: String,
    timezone: String,
    slot_minutes: u32,
    slots: Vec<TimeSlotDto>,
}

/// Input format for bookings passed from JavaScript.
#[derive(Deserialize)]
struct BookingInput {
    start_time: String,
    end_time: String,
    #[serde(default)]
    host: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers: parse boundary strings
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2024-07-01T09:00:00Z")
/// and naive local time (e.g., "2024-07-01T09:00:00"), which is interpreted
/// as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

/// Parse a "YYYY-MM-DD" calendar date.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn parse_rules_json(json: &str) -> Result<AvailabilityRules, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid rules JSON: {}", e)))
}

/// Convert a JSON array of `{start_time, end_time, host?}` objects into
/// `Vec<ExistingBooking>`.
fn parse_bookings_json(json: &str) -> Result<Vec<ExistingBooking>, JsValue> {
    let inputs: Vec<BookingInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bookings JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            let start_time = parse_datetime(&input.start_time)?;
            let end_time = parse_datetime(&input.end_time)?;
            Ok(ExistingBooking {
                start_time,
                end_time,
                host: input.host,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate bookable slots for a resource across an inclusive date range.
///
/// Returns a JSON string containing an array of `{start, end, host}` objects
/// with RFC 3339 datetime strings, ordered per the rules' pooling strategy.
///
/// # Arguments
/// - `rules_json` -- The resource's availability rules as JSON
/// - `bookings_json` -- JSON array of existing bookings
/// - `start_date` -- First date of the range ("YYYY-MM-DD")
/// - `end_date` -- Last date of the range, inclusive ("YYYY-MM-DD")
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots(
    rules_json: &str,
    bookings_json: &str,
    start_date: &str,
    end_date: &str,
) -> Result<String, JsValue> {
    let rules = parse_rules_json(rules_json)?;
    let bookings = parse_bookings_json(bookings_json)?;
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;

    let slots = slot_engine::generate(&rules, &bookings, start, end)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<TimeSlotDto> = slots.iter().map(TimeSlotDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Generate slots wrapped in the booking-surface response envelope, echoing
/// the resource id, timezone, and slot length alongside the slots.
#[wasm_bindgen(js_name = "quoteAvailability")]
pub fn quote_availability(
    resource_id: &str,
    rules_json: &str,
    bookings_json: &str,
    start_date: &str,
    end_date: &str,
) -> Result<String, JsValue> {
    let rules = parse_rules_json(rules_json)?;
    let bookings = parse_bookings_json(bookings_json)?;
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;

    let quote = slot_engine::quote(resource_id, &rules, &bookings, start, end)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dto = QuoteDto {
        resource_id: quote.resource_id,
        timezone: quote.timezone,
        slot_minutes: quote.slot_minutes,
        slots: quote.slots.iter().map(TimeSlotDto::from).collect(),
    };

    serde_json::to_string(&dto)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Find the first bookable slot in the range, or `null` when none exists.
///
/// Returns a JSON string: a `{start, end, host}` object or `null`.
#[wasm_bindgen(js_name = "findFirstSlot")]
pub fn find_first_slot(
    rules_json: &str,
    bookings_json: &str,
    start_date: &str,
    end_date: &str,
) -> Result<String, JsValue> {
    let rules = parse_rules_json(rules_json)?;
    let bookings = parse_bookings_json(bookings_json)?;
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;

    let first = slot_engine::find_first_slot(&rules, &bookings, start, end)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dto = first.as_ref().map(TimeSlotDto::from);

    serde_json::to_string(&dto)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
