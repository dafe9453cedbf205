//! Domain types for the availability calendar
//!
//! Everything here is a read-only snapshot per computation: reservation
//! intervals are owned by the feed-fetch collaborator, and the layout
//! structures are recomputed from scratch whenever inputs change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{CalendarError, Result};

// ============================================================================
// Reservation Types
// ============================================================================

/// Reservation status carried by the upstream feed's STATUS property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Tentative,
    Blocked,
}

/// A reservation synced from an external iCal feed.
///
/// `end` is EXCLUSIVE per the iCal convention: it names the first day the
/// stay no longer occupies. The final night stayed is `end - 1`
/// ([`ReservationInterval::last_occupied_night`]) while the departure
/// morning is `end` itself ([`ReservationInterval::checkout_day`]). Both are
/// exposed as distinct named values so every caller picks explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationInterval {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: Option<ReservationStatus>,
}

impl ReservationInterval {
    /// Create a new reservation interval without validating it.
    ///
    /// Malformed intervals (`end <= start`) are tolerated here and rejected
    /// with a warning during index construction, so one bad feed record
    /// cannot blank the whole calendar.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self { id: id.into(), title: title.into(), start, end, status: None }
    }

    /// Set the reservation status (builder style).
    #[must_use]
    pub fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// The departure morning: the exclusive end date itself.
    pub fn checkout_day(&self) -> NaiveDate {
        self.end
    }

    /// The final night stayed: `end - 1 day`.
    ///
    /// Distinct from [`Self::checkout_day`]; tooltips must use this value so
    /// guests are never shown a phantom extra night.
    pub fn last_occupied_night(&self) -> NaiveDate {
        // A well-formed interval has end > start, so the predecessor exists.
        self.end.pred_opt().unwrap_or(self.start)
    }

    /// Whether the stay covers exactly one night.
    pub fn is_single_night(&self) -> bool {
        self.start.succ_opt() == Some(self.end)
    }

    /// Half-open occupancy test: `start <= day < end`.
    pub fn occupies(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }

    /// Check the exclusive-end invariant `end > start`.
    pub fn validate(&self) -> Result<()> {
        if self.end > self.start {
            Ok(())
        } else {
            Err(CalendarError::MalformedInterval {
                id: self.id.clone(),
                start: self.start,
                end: self.end,
            })
        }
    }
}

/// Loosely-typed reservation event as handed over by the feed collaborator.
///
/// Dates arrive as raw strings straight out of the parsed feed; they are
/// validated into [`ReservationInterval`] at the date-normalization boundary
/// rather than trusted downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFeedEvent {
    pub uid: String,
    pub summary: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub status: Option<String>,
}

// ============================================================================
// Window & Layout Types
// ============================================================================

/// The date window the caller wants rendered, both bounds inclusive.
///
/// Typically the current month through the month after next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisibleWindow {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl VisibleWindow {
    pub fn new(first_day: NaiveDate, last_day: NaiveDate) -> Self {
        Self { first_day, last_day }
    }

    /// A degenerate window is fatal to the call: there is nothing sensible
    /// to render.
    pub fn validate(&self) -> Result<()> {
        if self.last_day < self.first_day {
            Err(CalendarError::EmptyWindow { first: self.first_day, last: self.last_day })
        } else {
            Ok(())
        }
    }

    /// Whether `day` falls inside the window (inclusive bounds).
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.first_day <= day && day <= self.last_day
    }
}

/// How an interval relates to one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayRole {
    /// The stay begins on this day.
    CheckIn,
    /// The departure morning (the exclusive end date itself).
    CheckOut,
    /// Strictly between check-in and the last occupied night.
    MidStay,
    /// Single-night stay: check-in and last occupied night coincide.
    CheckInAndOut,
    /// Touched without a boundary role (the last occupied night of a
    /// multi-night stay).
    None,
}

/// Visual lane slot for rendering overlapping date bars.
///
/// Purely a rendering concept: recomputed deterministically on every pass
/// and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lane(pub u8);

/// One interval's relationship to a day, with its assigned lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub interval: ReservationInterval,
    pub role: DayRole,
    pub lane: Lane,
}

/// A single day in the rendered grid, with every interval touching it.
///
/// Entries are ordered `(start asc, id asc)` regardless of feed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Filler day completing a week row; still classified so
    /// boundary-crossing stays render, but visually muted.
    pub out_of_range: bool,
    /// One reservation checks out and a different one checks in today.
    pub same_day_turnover: bool,
    pub entries: Vec<DayEntry>,
    pub primitives: DayPrimitives,
}

/// A Sunday-first week row; always exactly seven cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub days: Vec<DayCell>,
}

/// All week rows belonging to one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGroup {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

/// Warning collected while excluding a malformed feed record.
///
/// Returned alongside the layout so the caller can surface it; the engine
/// itself never renders error states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutWarning {
    pub id: String,
    pub message: String,
}

/// The fully computed calendar layout: the sole output of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarLayout {
    pub months: Vec<MonthGroup>,
    pub warnings: Vec<LayoutWarning>,
}

// ============================================================================
// Render Primitives
// ============================================================================

/// Which cell edge a boundary marker sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPosition {
    CheckIn,
    CheckOut,
}

/// Occupancy bar segment for one interval on one day.
///
/// `left_edge`/`right_edge` say whether the bar is clipped at the cell
/// boundary because the stay continues beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarSegment {
    pub lane: Lane,
    pub left_edge: bool,
    pub right_edge: bool,
    pub color_role: DayRole,
}

/// Check-in / check-out point marker for one interval on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryMarker {
    pub lane: Lane,
    pub position: MarkerPosition,
    pub color_role: DayRole,
}

/// Tooltip payload for one interval on one day.
///
/// `formatted_range` always spans `[start, last_occupied_night]`, never the
/// raw exclusive end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    pub id: String,
    pub title: String,
    pub formatted_range: String,
    pub status: Option<ReservationStatus>,
}

/// Drawable primitives for one day cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPrimitives {
    pub bars: Vec<BarSegment>,
    pub markers: Vec<BoundaryMarker>,
    pub tooltips: Vec<Tooltip>,
}
