//! Existing-booking conflict exclusion with pre/post buffers.
//!
//! Each existing booking is inflated by the configured buffers into a
//! blocked interval; candidate slots overlapping any blocked interval are
//! rejected. Adjacency is not overlap: a slot ending exactly where a blocked
//! interval starts survives.

use chrono::{DateTime, Duration, Utc};

use crate::rules::{ExistingBooking, TimeSlot};

/// A buffer-inflated exclusion zone around an existing booking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockedInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BlockedInterval {
    /// Two intervals overlap iff `slot.start < self.end && slot.end > self.start`.
    /// This excludes the adjacent case where one ends as the other begins.
    pub fn overlaps(&self, slot: &TimeSlot) -> bool {
        slot.start < self.end && slot.end > self.start
    }
}

/// Inflate each booking into its blocked interval:
/// `[start_time − buffer_before, end_time + buffer_after]`.
pub fn blocked_intervals(
    bookings: &[ExistingBooking],
    buffer_before: u32,
    buffer_after: u32,
) -> Vec<BlockedInterval> {
    let before = Duration::minutes(buffer_before as i64);
    let after = Duration::minutes(buffer_after as i64);

    bookings
        .iter()
        .map(|b| BlockedInterval {
            start: b.start_time - before,
            end: b.end_time + after,
        })
        .collect()
}

/// Accept candidates in input order, rejecting any that overlap a blocked
/// interval and stopping once `max_accepted` slots have been taken.
/// Remaining candidates are dropped, not deferred.
///
/// The result is an order-preserving subsequence of `candidates`, and its
/// length never decreases as `max_accepted` grows with everything else held
/// fixed.
pub fn filter_candidates(
    candidates: Vec<TimeSlot>,
    blocked: &[BlockedInterval],
    max_accepted: u32,
) -> Vec<TimeSlot> {
    let mut accepted = Vec::new();
    for slot in candidates {
        if accepted.len() as u32 >= max_accepted {
            break;
        }
        if blocked.iter().any(|b| b.overlaps(&slot)) {
            continue;
        }
        accepted.push(slot);
    }
    accepted
}
