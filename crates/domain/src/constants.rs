//! Domain constants
//!
//! Centralized location for domain-level constants used by the calendar
//! engine and its callers.

/// Calendar grids are always rendered as Sunday-first 7-day rows.
pub const DAYS_PER_WEEK: usize = 7;

/// Date format used when rendering tooltip stay ranges.
pub const TOOLTIP_DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between the first and last night in a tooltip range.
pub const TOOLTIP_RANGE_SEPARATOR: &str = " to ";

/// Default number of memoized layouts retained by `LayoutCache`.
pub const DEFAULT_LAYOUT_CACHE_CAPACITY: usize = 16;
