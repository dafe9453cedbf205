//! Day classification
//!
//! Computes each interval's role on a given day and detects same-day
//! turnover. Classification depends only on `(day, start, end)` - never
//! wall-clock time or feed order - and never fails; malformed intervals are
//! filtered during index construction.

use chrono::NaiveDate;
use staygrid_domain::{DayEntry, DayRole, ReservationInterval};

/// Role of `interval` on `day`.
///
/// Precedence: a single-night stay's start day is [`DayRole::CheckInAndOut`];
/// then check-in, checkout (the exclusive end date itself - departure happens
/// on that calendar day), mid-stay, and finally [`DayRole::None`] for the
/// last occupied night of a multi-night stay.
pub fn classify(day: NaiveDate, interval: &ReservationInterval) -> DayRole {
    let last_night = interval.last_occupied_night();

    if day == interval.start && day == last_night {
        DayRole::CheckInAndOut
    } else if day == interval.start {
        DayRole::CheckIn
    } else if day == interval.checkout_day() {
        DayRole::CheckOut
    } else if interval.start < day && day < last_night {
        DayRole::MidStay
    } else {
        DayRole::None
    }
}

/// Same-day turnover: one reservation's checkout and a different
/// reservation's check-in both occur on this day.
///
/// True iff the entries include at least one `CheckOut` role and at least
/// one `CheckIn` role belonging to a different id.
pub fn same_day_turnover(entries: &[DayEntry]) -> bool {
    entries.iter().filter(|e| e.role == DayRole::CheckOut).any(|out| {
        entries
            .iter()
            .any(|e| e.role == DayRole::CheckIn && e.interval.id != out.interval.id)
    })
}
