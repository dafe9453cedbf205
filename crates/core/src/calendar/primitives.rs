//! Render primitive builder
//!
//! Turns classified day entries into drawable bar/marker/tooltip primitives
//! so the UI layer never re-derives interval math per render. Pure
//! transformation; which of two turnover stays gets "primary" styling is a
//! presentation rule layered on lane + role by the caller.

use chrono::NaiveDate;
use staygrid_domain::constants::{TOOLTIP_DATE_FORMAT, TOOLTIP_RANGE_SEPARATOR};
use staygrid_domain::{
    BarSegment, BoundaryMarker, DayEntry, DayPrimitives, DayRole, MarkerPosition,
    ReservationInterval, Tooltip,
};

/// Build the drawable primitives for one day cell.
pub fn build_day(date: NaiveDate, entries: &[DayEntry]) -> DayPrimitives {
    let mut primitives = DayPrimitives::default();

    for entry in entries {
        // Occupancy bar: half-open test, so the checkout morning draws a
        // marker but no bar.
        if entry.interval.occupies(date) {
            primitives.bars.push(BarSegment {
                lane: entry.lane,
                left_edge: date > entry.interval.start,
                right_edge: date < entry.interval.last_occupied_night(),
                color_role: entry.role,
            });
        }

        match entry.role {
            DayRole::CheckIn => primitives.markers.push(BoundaryMarker {
                lane: entry.lane,
                position: MarkerPosition::CheckIn,
                color_role: entry.role,
            }),
            DayRole::CheckOut => primitives.markers.push(BoundaryMarker {
                lane: entry.lane,
                position: MarkerPosition::CheckOut,
                color_role: entry.role,
            }),
            DayRole::CheckInAndOut => {
                // Single-night stay: both boundary markers share the cell.
                primitives.markers.push(BoundaryMarker {
                    lane: entry.lane,
                    position: MarkerPosition::CheckIn,
                    color_role: entry.role,
                });
                primitives.markers.push(BoundaryMarker {
                    lane: entry.lane,
                    position: MarkerPosition::CheckOut,
                    color_role: entry.role,
                });
            }
            DayRole::MidStay | DayRole::None => {}
        }

        primitives.tooltips.push(Tooltip {
            id: entry.interval.id.clone(),
            title: entry.interval.title.clone(),
            formatted_range: format_stay_range(&entry.interval),
            status: entry.interval.status,
        });
    }

    primitives
}

/// Format the stayed range `[start, last_occupied_night]`.
///
/// Never uses the raw exclusive end, which would show guests a phantom
/// extra night.
pub fn format_stay_range(interval: &ReservationInterval) -> String {
    format!(
        "{}{}{}",
        interval.start.format(TOOLTIP_DATE_FORMAT),
        TOOLTIP_RANGE_SEPARATOR,
        interval.last_occupied_night().format(TOOLTIP_DATE_FORMAT)
    )
}
