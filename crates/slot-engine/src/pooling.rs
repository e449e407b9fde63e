//! Cross-host ordering of the combined slot list.

use crate::rules::{PoolingStrategy, TimeSlot};

/// Reorder the complete multi-day slot list per the pooling strategy.
///
/// Pooling never filters — the result is a permutation of the input.
///
/// `RoundRobin` sorts by ascending start and breaks identical-start ties
/// alphabetically by host name, interleaving hosts deterministically.
/// `LeastLoaded` has no distinct ranking and falls back to a plain
/// chronological (stable) sort.
pub fn pool_slots(mut slots: Vec<TimeSlot>, strategy: PoolingStrategy) -> Vec<TimeSlot> {
    match strategy {
        PoolingStrategy::RoundRobin => {
            slots.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.host.cmp(&b.host)));
        }
        PoolingStrategy::LeastLoaded => {
            slots.sort_by_key(|s| s.start);
        }
    }
    slots
}
