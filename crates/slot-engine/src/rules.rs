//! Configuration and value types for availability-slot generation.
//!
//! `AvailabilityRules` is owned by a resource entity in the calling layer and
//! is read-only here. All types are serde-friendly so the CLI and WASM
//! boundaries can pass them through as JSON without translation layers.

use chrono::{DateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Per-resource availability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRules {
    /// IANA timezone identifier (e.g., "America/New_York"). Advisory only —
    /// all interval arithmetic runs on absolute UTC instants — but it must
    /// name a real zone.
    pub timezone: String,
    /// Fixed duration of every generated slot, in minutes.
    pub slot_minutes: u32,
    /// Minutes subtracted from each existing booking's start when building
    /// its blocked interval.
    #[serde(default)]
    pub buffer_before: u32,
    /// Minutes added to each existing booking's end when building its
    /// blocked interval.
    #[serde(default)]
    pub buffer_after: u32,
    /// Hard cap on slots returned per host per calendar day.
    #[serde(default = "default_max_per_day")]
    pub max_per_day_per_host: u32,
    /// Weekly availability windows. Multiple windows may name the same host
    /// (different hours on different days) or different hosts (pooling
    /// candidates).
    pub windows: Vec<AvailabilityWindow>,
    /// Dates and inclusive date ranges fully excluded from generation.
    #[serde(default)]
    pub blackouts: Vec<Blackout>,
    /// Strategy for ordering slots from multiple hosts.
    #[serde(default)]
    pub pooling: PoolingStrategy,
}

fn default_max_per_day() -> u32 {
    10
}

/// A recurring weekly availability interval for one host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    /// The named party this window belongs to.
    pub host: String,
    /// Weekday names ("Monday" or "Mon"), matched case-insensitively.
    pub days: Vec<String>,
    /// "HH:MM" clock time at which the window opens.
    pub start: String,
    /// "HH:MM" clock time at which the window closes (exclusive).
    pub end: String,
}

impl AvailabilityWindow {
    /// Parse `start`/`end` into clock times.
    pub fn clock_range(&self) -> Result<(NaiveTime, NaiveTime)> {
        Ok((parse_clock(&self.start)?, parse_clock(&self.end)?))
    }

    /// Parse `days` into concrete weekdays.
    pub fn weekdays(&self) -> Result<Vec<Weekday>> {
        self.days.iter().map(|d| parse_weekday(d)).collect()
    }
}

/// Parse an "HH:MM" clock string.
pub fn parse_clock(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| SlotError::InvalidClockTime(s.to_string()))
}

/// Parse a weekday name. Full English names and three-letter abbreviations
/// are accepted, in any case.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    s.parse().map_err(|_| SlotError::InvalidWeekday(s.to_string()))
}

/// A calendar exclusion: one date, or an inclusive date range.
///
/// Dates are "YYYY-MM-DD" strings and matching is lexicographic, which
/// coincides with chronological order for ISO dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Blackout {
    /// A single excluded date.
    Date(String),
    /// An inclusive `[start, end]` range of excluded dates.
    Range(String, String),
}

impl Blackout {
    /// Whether `date` (a "YYYY-MM-DD" string) falls under this entry.
    pub fn matches(&self, date: &str) -> bool {
        match self {
            Blackout::Date(d) => d == date,
            Blackout::Range(start, end) => start.as_str() <= date && date <= end.as_str(),
        }
    }
}

/// Strategy for ordering slots from multiple hosts that coincide in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolingStrategy {
    /// Interleave hosts deterministically: ascending start, identical-start
    /// ties broken alphabetically by host name.
    #[default]
    RoundRobin,
    /// Reserved. Currently orders chronologically with no load-based
    /// ranking; kept as the extension point for one.
    LeastLoaded,
}

/// An existing booking fetched by the calling layer, read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingBooking {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Host the booking is attributed to. A booking without a host cannot be
    /// assigned to any host's blocked set and is invisible to conflict
    /// filtering.
    #[serde(default)]
    pub host: Option<String>,
}

/// A bookable slot: fixed duration, attributed to one host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub host: String,
}
