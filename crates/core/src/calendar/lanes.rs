//! Visual lane assignment
//!
//! When several stays touch one day they must render without overlapping,
//! and the same stay must keep the same lane across every day it touches.
//! Lanes are allocated arena-style, keyed by id, so the result is a pure
//! function of the inputs - identical inputs always yield identical lanes
//! and the grid never flickers across recomputation.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use ahash::AHashMap;
use chrono::NaiveDate;
use staygrid_domain::{Lane, ReservationInterval};

/// Assign a lane to every interval, scanning grid days in date order.
///
/// On an interval's first touched day it takes the lowest lane not held by
/// any interval still occupying nights on or after that day; a lane frees
/// once its holder's last occupied night has passed, so an incoming stay may
/// reuse the lane an outgoing stay vacates on a turnover day. Ties among
/// same-day first encounters follow the `(start, id)` index order.
///
/// `intervals` must already be in `(start asc, id asc)` order, as produced
/// by [`super::index::IntervalIndex`]. Duplicate ids share the first
/// record's lane.
pub fn assign_lanes(
    intervals: &[ReservationInterval],
    grid_first: NaiveDate,
) -> AHashMap<String, Lane> {
    let mut lanes: AHashMap<String, Lane> = AHashMap::with_capacity(intervals.len());
    // Lanes currently held, keyed by the last night they are defended.
    let mut active: BinaryHeap<Reverse<(NaiveDate, u8)>> = BinaryHeap::new();
    let mut free: BTreeSet<u8> = BTreeSet::new();
    let mut next_lane: u8 = 0;

    for interval in intervals {
        if lanes.contains_key(&interval.id) {
            continue;
        }

        let first_day = interval.start.max(grid_first);
        while let Some(&Reverse((active_until, lane))) = active.peek() {
            if active_until < first_day {
                active.pop();
                free.insert(lane);
            } else {
                break;
            }
        }

        let lane = match free.pop_first() {
            Some(lane) => lane,
            None => {
                let lane = next_lane;
                next_lane = next_lane.saturating_add(1);
                lane
            }
        };

        active.push(Reverse((interval.last_occupied_night(), lane)));
        lanes.insert(interval.id.clone(), Lane(lane));
    }

    lanes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn interval(id: &str, start: NaiveDate, end: NaiveDate) -> ReservationInterval {
        ReservationInterval::new(id, format!("Stay {id}"), start, end)
    }

    fn sorted(mut stays: Vec<ReservationInterval>) -> Vec<ReservationInterval> {
        stays.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
        stays
    }

    #[test]
    fn overlapping_stays_get_distinct_lanes() {
        let stays = sorted(vec![
            interval("a", day(2024, 8, 1), day(2024, 8, 5)),
            interval("b", day(2024, 8, 3), day(2024, 8, 7)),
        ]);
        let lanes = assign_lanes(&stays, day(2024, 8, 1));

        assert_eq!(lanes["a"], Lane(0));
        assert_eq!(lanes["b"], Lane(1));
    }

    #[test]
    fn turnover_day_reuses_the_freed_lane() {
        // i1 checks out the morning i2 checks in; i1's last night is Aug 4,
        // so its lane is free for i2's first day, Aug 5.
        let stays = sorted(vec![
            interval("i1", day(2024, 8, 1), day(2024, 8, 5)),
            interval("i2", day(2024, 8, 5), day(2024, 8, 8)),
        ]);
        let lanes = assign_lanes(&stays, day(2024, 8, 1));

        assert_eq!(lanes["i1"], Lane(0));
        assert_eq!(lanes["i2"], Lane(0));
    }

    #[test]
    fn lowest_free_lane_is_taken_first() {
        let stays = sorted(vec![
            interval("a", day(2024, 8, 1), day(2024, 8, 3)),
            interval("b", day(2024, 8, 1), day(2024, 8, 10)),
            interval("c", day(2024, 8, 4), day(2024, 8, 6)),
        ]);
        let lanes = assign_lanes(&stays, day(2024, 8, 1));

        assert_eq!(lanes["a"], Lane(0));
        assert_eq!(lanes["b"], Lane(1));
        // "a" has vacated lane 0 by the time "c" arrives; "b" still holds 1.
        assert_eq!(lanes["c"], Lane(0));
    }

    #[test]
    fn ties_on_first_day_break_by_id() {
        let stays = sorted(vec![
            interval("zeta", day(2024, 8, 1), day(2024, 8, 4)),
            interval("alpha", day(2024, 8, 1), day(2024, 8, 4)),
        ]);
        let lanes = assign_lanes(&stays, day(2024, 8, 1));

        assert_eq!(lanes["alpha"], Lane(0));
        assert_eq!(lanes["zeta"], Lane(1));
    }

    #[test]
    fn assignment_is_deterministic_across_calls() {
        let stays = sorted(vec![
            interval("a", day(2024, 8, 1), day(2024, 8, 6)),
            interval("b", day(2024, 8, 2), day(2024, 8, 9)),
            interval("c", day(2024, 8, 5), day(2024, 8, 12)),
            interval("d", day(2024, 8, 10), day(2024, 8, 14)),
        ]);

        let first = assign_lanes(&stays, day(2024, 8, 1));
        let second = assign_lanes(&stays, day(2024, 8, 1));
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_ids_share_one_lane() {
        let stays = sorted(vec![
            interval("dup", day(2024, 8, 1), day(2024, 8, 3)),
            interval("dup", day(2024, 8, 1), day(2024, 8, 3)),
        ]);
        let lanes = assign_lanes(&stays, day(2024, 8, 1));

        assert_eq!(lanes.len(), 1);
        assert_eq!(lanes["dup"], Lane(0));
    }

    #[test]
    fn stays_clipped_by_the_grid_start_still_hold_their_lane() {
        let stays = sorted(vec![
            interval("carryover", day(2024, 7, 20), day(2024, 8, 10)),
            interval("fresh", day(2024, 8, 1), day(2024, 8, 4)),
        ]);
        let lanes = assign_lanes(&stays, day(2024, 8, 1));

        assert_eq!(lanes["carryover"], Lane(0));
        assert_eq!(lanes["fresh"], Lane(1));
    }
}
