//! # StayGrid Core
//!
//! Pure business logic for the availability calendar - no infrastructure
//! dependencies.
//!
//! This crate contains:
//! - The calendar layout engine (date normalization, interval indexing, day
//!   classification, lane assignment, window expansion, render primitives)
//! - Port/adapter interfaces (traits) for the external reservation feed
//! - The availability service wiring ports to the engine
//!
//! ## Architecture Principles
//! - Only depends on `staygrid-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - The layout pipeline is a deterministic pure function of
//!   `(intervals, window)`

pub mod availability;
pub mod calendar;
pub mod utils;

// Re-export specific items to avoid ambiguity
pub use availability::ports::{FeedRefresh, ReservationFeed};
pub use availability::service::{AvailabilityService, PropertyCalendar};
pub use calendar::layout::{compute_calendar_layout, layout_key};
pub use utils::cache::LayoutCache;
