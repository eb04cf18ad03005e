//! Client-side trip state
//!
//! The in-memory store a UI session works against, the data-source seam
//! it reconciles through, and the pure filter/aggregation helpers that
//! derive views from the cache.

pub mod filter;
pub mod roster;
pub mod source;
pub mod store;

pub use filter::{filter_trips, group_by_day, DayPlan, TripFilter};
pub use roster::UserRoster;
pub use source::{MockTripSource, RemoteTripSource, TripSource};
pub use store::TripStore;
