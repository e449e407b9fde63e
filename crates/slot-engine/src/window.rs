//! Raw candidate-slot emission for one day of one window.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::rules::TimeSlot;

/// Emit the raw fixed-size candidate slots for one calendar day of one
/// host's window, in ascending start order.
///
/// Slots begin at `day @ window_start` and step by `slot_minutes`; emission
/// stops as soon as a candidate's end would pass `day @ window_end`, so a
/// partial trailing slot is dropped, never truncated. A window whose end is
/// at or before its start yields nothing — overnight wraparound is not
/// supported.
pub fn expand_window(
    host: &str,
    day: NaiveDate,
    window_start: NaiveTime,
    window_end: NaiveTime,
    slot_minutes: u32,
) -> Vec<TimeSlot> {
    if slot_minutes == 0 || window_end <= window_start {
        return Vec::new();
    }

    let step = Duration::minutes(slot_minutes as i64);
    let open = day.and_time(window_start).and_utc();
    let close = day.and_time(window_end).and_utc();

    let mut slots = Vec::new();
    let mut cursor = open;
    while cursor + step <= close {
        slots.push(TimeSlot {
            start: cursor,
            end: cursor + step,
            host: host.to_string(),
        });
        cursor = cursor + step;
    }

    slots
}
