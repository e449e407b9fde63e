//! Date-range scheduling — the engine's entry points.
//!
//! [`generate`] folds the requested date range day by day: blackout days are
//! skipped whole, each window naming the day's weekday is expanded into raw
//! candidates, candidates are filtered against that host's buffered
//! bookings, and the pooling strategy orders the combined result once at the
//! end. There is no state between days or hosts; the fold is deterministic.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::conflict::{blocked_intervals, filter_candidates, BlockedInterval};
use crate::error::{Result, SlotError};
use crate::pooling::pool_slots;
use crate::rules::{AvailabilityRules, ExistingBooking, TimeSlot};
use crate::window::expand_window;

/// One window with its clock strings and weekday names resolved.
struct ResolvedWindow {
    host: String,
    days: Vec<Weekday>,
    start: NaiveTime,
    end: NaiveTime,
}

/// Response envelope for the booking-surface boundary: the generated slots
/// plus echoed resource metadata. The metadata is passed through, not
/// computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuote {
    pub resource_id: String,
    pub timezone: String,
    pub slot_minutes: u32,
    pub slots: Vec<TimeSlot>,
}

/// Compute the bookable slots for a resource across an inclusive date range.
///
/// Zero configured windows, a fully blacked-out range, or a range where
/// every candidate conflicts all produce an empty list, not an error; an
/// inverted range (`end_date < start_date`) iterates zero days and is empty
/// too. Errors are reserved for malformed configuration: clock strings,
/// weekday names, and the (advisory) timezone are resolved up front and a
/// bad entry fails the call before any day is processed.
///
/// Bookings without a host attribution are skipped when bucketing blocked
/// intervals, so they never constrain any host's slots.
pub fn generate(
    rules: &AvailabilityRules,
    bookings: &[ExistingBooking],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<TimeSlot>> {
    let _tz: chrono_tz::Tz = rules
        .timezone
        .parse()
        .map_err(|_| SlotError::InvalidTimezone(rules.timezone.clone()))?;

    let windows = resolve_windows(rules)?;

    // Bucket buffer-inflated blocked intervals by host once for the whole
    // range. Hostless bookings cannot be attributed and are dropped here.
    let mut by_host: HashMap<&str, Vec<ExistingBooking>> = HashMap::new();
    for booking in bookings {
        if let Some(host) = booking.host.as_deref() {
            by_host.entry(host).or_default().push(booking.clone());
        }
    }
    let blocked_by_host: HashMap<&str, Vec<BlockedInterval>> = by_host
        .iter()
        .map(|(host, host_bookings)| {
            (
                *host,
                blocked_intervals(host_bookings, rules.buffer_before, rules.buffer_after),
            )
        })
        .collect();

    let mut slots = Vec::new();
    let mut day = start_date;
    while day <= end_date {
        schedule_day(day, &windows, &blocked_by_host, rules, &mut slots);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    Ok(pool_slots(slots, rules.pooling))
}

/// First slot of the pooled result, if the range yields any.
pub fn find_first_slot(
    rules: &AvailabilityRules,
    bookings: &[ExistingBooking],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Option<TimeSlot>> {
    Ok(generate(rules, bookings, start_date, end_date)?
        .into_iter()
        .next())
}

/// [`generate`] wrapped in the boundary response envelope, echoing the
/// resource id, timezone, and slot length alongside the slots.
pub fn quote(
    resource_id: &str,
    rules: &AvailabilityRules,
    bookings: &[ExistingBooking],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<AvailabilityQuote> {
    let slots = generate(rules, bookings, start_date, end_date)?;
    Ok(AvailabilityQuote {
        resource_id: resource_id.to_string(),
        timezone: rules.timezone.clone(),
        slot_minutes: rules.slot_minutes,
        slots,
    })
}

fn resolve_windows(rules: &AvailabilityRules) -> Result<Vec<ResolvedWindow>> {
    rules
        .windows
        .iter()
        .map(|w| {
            let (start, end) = w.clock_range()?;
            Ok(ResolvedWindow {
                host: w.host.clone(),
                days: w.weekdays()?,
                start,
                end,
            })
        })
        .collect()
}

/// Schedule one calendar day: blackout check, then expand-and-filter every
/// window naming this weekday.
fn schedule_day(
    day: NaiveDate,
    windows: &[ResolvedWindow],
    blocked_by_host: &HashMap<&str, Vec<BlockedInterval>>,
    rules: &AvailabilityRules,
    out: &mut Vec<TimeSlot>,
) {
    let date = day.format("%Y-%m-%d").to_string();
    if rules.blackouts.iter().any(|b| b.matches(&date)) {
        return;
    }

    let weekday = day.weekday();
    let day_start = day.and_time(NaiveTime::MIN).and_utc();
    let day_end = day_start + Duration::days(1);

    // Acceptances per host so far today. The cap binds per (host, day), so
    // it must hold across several windows of the same host on one weekday.
    let mut used: HashMap<&str, u32> = HashMap::new();

    for window in windows.iter().filter(|w| w.days.contains(&weekday)) {
        let candidates =
            expand_window(&window.host, day, window.start, window.end, rules.slot_minutes);

        // This host's blocked intervals that touch this day. The inflated
        // interval is what matters: a buffer can spill across midnight.
        let day_blocked: Vec<BlockedInterval> = blocked_by_host
            .get(window.host.as_str())
            .map(|all| {
                all.iter()
                    .filter(|b| b.start < day_end && b.end > day_start)
                    .copied()
                    .collect()
            })
            .unwrap_or_default();

        let used_today = used.get(window.host.as_str()).copied().unwrap_or(0);
        let remaining = rules.max_per_day_per_host.saturating_sub(used_today);
        let accepted = filter_candidates(candidates, &day_blocked, remaining);

        *used.entry(window.host.as_str()).or_insert(0) += accepted.len() as u32;
        out.extend(accepted);
    }
}
