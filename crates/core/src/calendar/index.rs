//! Interval index
//!
//! Buckets reservation intervals into the set touching each day of the
//! expanded grid range, in deterministic `(start asc, id asc)` order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use staygrid_domain::{LayoutWarning, ReservationInterval};
use tracing::warn;

/// Per-day lookup of the intervals touching each grid day.
///
/// A day D touches interval I iff `start <= D < end` (half-open occupancy)
/// or `D == end` for multi-night stays (the checkout boundary marker).
/// Single-night stays carry both boundary markers on their start day and
/// touch no other day.
///
/// Malformed intervals (`end <= start`) are excluded here with one warning
/// each. Duplicate ids from a re-synced feed are tolerated verbatim;
/// deduplication is the feed collaborator's contract.
#[derive(Debug)]
pub struct IntervalIndex {
    intervals: Vec<ReservationInterval>,
    days: BTreeMap<NaiveDate, Vec<usize>>,
}

impl IntervalIndex {
    /// Build the index over `[grid_first, grid_last]` (inclusive).
    ///
    /// The range is the expanded grid, not the bare visible window, so
    /// out-of-range filler days are classified too.
    pub fn build(
        intervals: &[ReservationInterval],
        grid_first: NaiveDate,
        grid_last: NaiveDate,
    ) -> (Self, Vec<LayoutWarning>) {
        let mut warnings = Vec::new();

        let mut kept: Vec<ReservationInterval> = Vec::with_capacity(intervals.len());
        for interval in intervals {
            if let Err(err) = interval.validate() {
                warn!(id = %interval.id, error = %err, "excluding malformed interval");
                warnings.push(LayoutWarning { id: interval.id.clone(), message: err.to_string() });
                continue;
            }
            let touches_range =
                interval.start <= grid_last && last_touched_day(interval) >= grid_first;
            if touches_range {
                kept.push(interval.clone());
            }
        }

        // Deterministic ordering, independent of feed order. LaneAssigner
        // relies on this order and nothing else.
        kept.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

        let mut days: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
        for (idx, interval) in kept.iter().enumerate() {
            let lo = interval.start.max(grid_first);
            let hi = last_touched_day(interval).min(grid_last);
            for day in lo.iter_days().take_while(|d| *d <= hi) {
                days.entry(day).or_default().push(idx);
            }
        }

        (Self { intervals: kept, days }, warnings)
    }

    /// The intervals touching `day`, ordered `(start asc, id asc)`.
    pub fn touching(&self, day: NaiveDate) -> impl Iterator<Item = &ReservationInterval> {
        self.days
            .get(&day)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.intervals[idx])
    }

    /// Every well-formed interval retained by the index, in bucket order.
    pub fn intervals(&self) -> &[ReservationInterval] {
        &self.intervals
    }
}

/// The last grid day an interval touches.
///
/// Multi-night stays touch their exclusive end day (the checkout marker);
/// single-night stays end on their start day, which already carries both
/// markers.
pub fn last_touched_day(interval: &ReservationInterval) -> NaiveDate {
    if interval.is_single_night() { interval.start } else { interval.end }
}
