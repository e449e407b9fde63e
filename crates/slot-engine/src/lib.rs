//! # slot-engine
//!
//! Deterministic availability-slot generation with multi-host pooling and
//! conflict exclusion for resource-booking platforms.
//!
//! Given a resource's availability rules (weekly per-host windows, blackout
//! dates, pre/post buffers, per-day caps) and a snapshot of its existing
//! bookings, the engine computes the bookable slots over a date range. It is
//! a pure, synchronous computation: no I/O, no shared state, and every
//! invocation is independent, so concurrent calls need no coordination.
//!
//! ## Modules
//!
//! - [`rules`] — configuration and value types
//! - [`window`] — raw candidate-slot emission for one day of one window
//! - [`conflict`] — buffered booking exclusion and acceptance caps
//! - [`scheduler`] — date-range entry points
//! - [`pooling`] — cross-host slot ordering
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod pooling;
pub mod rules;
pub mod scheduler;
pub mod window;

pub use error::SlotError;
pub use pooling::pool_slots;
pub use rules::{
    AvailabilityRules, AvailabilityWindow, Blackout, ExistingBooking, PoolingStrategy, TimeSlot,
};
pub use scheduler::{find_first_slot, generate, quote, AvailabilityQuote};
pub use window::expand_window;
