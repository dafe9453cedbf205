//! Availability-calendar engine
//!
//! Data flow: raw feed events -> [`normalize`] -> [`index`] -> [`classify`]
//! (+ [`lanes`]) -> [`primitives`], assembled by [`window`] + [`layout`] into
//! the month/week/day structure the UI consumes.

pub mod classify;
pub mod index;
pub mod lanes;
pub mod layout;
pub mod normalize;
pub mod primitives;
pub mod window;

pub use index::IntervalIndex;
pub use layout::{compute_calendar_layout, layout_key};
