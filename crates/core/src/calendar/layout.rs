//! Layout assembly
//!
//! The sole public entry point of the engine: a deterministic pure function
//! of `(intervals, window)`. Re-invocations are independent; callers memoize
//! via [`layout_key`] and `LayoutCache` instead of any module-level state.

use std::hash::{Hash, Hasher};

use ahash::AHasher;
use staygrid_domain::{
    CalendarLayout, DayCell, DayEntry, Lane, MonthGroup, ReservationInterval, Result,
    VisibleWindow, Week,
};
use tracing::debug;

use super::classify::{classify, same_day_turnover};
use super::index::IntervalIndex;
use super::lanes::assign_lanes;
use super::primitives::build_day;
use super::window::{expand, grid_bounds, GridDay};

/// Compute the full calendar layout for a visible window.
///
/// Fails fast only on a degenerate window; malformed intervals are excluded
/// fail-soft and reported in `CalendarLayout::warnings`.
pub fn compute_calendar_layout(
    intervals: &[ReservationInterval],
    window: &VisibleWindow,
) -> Result<CalendarLayout> {
    debug!(
        first_day = %window.first_day,
        last_day = %window.last_day,
        intervals = intervals.len(),
        "computing calendar layout"
    );

    let spans = expand(window)?;
    let Some((grid_first, grid_last)) = grid_bounds(&spans) else {
        return Ok(CalendarLayout { months: Vec::new(), warnings: Vec::new() });
    };

    let (index, warnings) = IntervalIndex::build(intervals, grid_first, grid_last);
    let lanes = assign_lanes(index.intervals(), grid_first);

    let months = spans
        .into_iter()
        .map(|span| MonthGroup {
            year: span.year,
            month: span.month,
            weeks: span
                .weeks
                .into_iter()
                .map(|week| Week {
                    days: week.into_iter().map(|day| build_cell(day, &index, &lanes)).collect(),
                })
                .collect(),
        })
        .collect();

    Ok(CalendarLayout { months, warnings })
}

fn build_cell(
    day: GridDay,
    index: &IntervalIndex,
    lanes: &ahash::AHashMap<String, Lane>,
) -> DayCell {
    let entries: Vec<DayEntry> = index
        .touching(day.date)
        .map(|interval| DayEntry {
            role: classify(day.date, interval),
            lane: lanes.get(&interval.id).copied().unwrap_or(Lane(0)),
            interval: interval.clone(),
        })
        .collect();

    let primitives = build_day(day.date, &entries);

    DayCell {
        date: day.date,
        out_of_range: day.out_of_range,
        same_day_turnover: same_day_turnover(&entries),
        entries,
        primitives,
    }
}

/// Structural hash of `(intervals, window)` for caller-side memoization.
///
/// Identical inputs always produce the same key within a process; the key
/// is an optimization handle, not a persistent identifier.
pub fn layout_key(intervals: &[ReservationInterval], window: &VisibleWindow) -> u64 {
    let mut hasher = AHasher::default();
    window.hash(&mut hasher);
    intervals.hash(&mut hasher);
    hasher.finish()
}
