//! Date normalization boundary
//!
//! Converts arbitrary feed date input into canonical UTC calendar days and
//! derives the last occupied night from an exclusive end date. Everything
//! downstream works on `NaiveDate` values produced here, which eliminates
//! DST/timezone drift between the client and the feed source.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use staygrid_domain::{
    CalendarError, LayoutWarning, RawFeedEvent, ReservationInterval, ReservationStatus, Result,
};
use tracing::warn;

/// Map a UTC instant to its UTC calendar day.
pub fn day_from_utc(dt: DateTime<Utc>) -> NaiveDate {
    dt.date_naive()
}

/// Parse arbitrary feed date input into a UTC calendar day.
///
/// Accepts `YYYY-MM-DD`, iCal basic `YYYYMMDD` / `YYYYMMDDTHHMMSSZ`, and
/// RFC 3339 instants (mapped to the UTC calendar day). Anything else is an
/// [`CalendarError::InvalidDate`].
pub fn normalize_to_calendar_day(input: &str) -> Result<NaiveDate> {
    let token = input.trim();
    if token.is_empty() {
        return Err(CalendarError::InvalidDate(input.to_string()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(token, "%Y%m%d") {
        return Ok(date);
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(token, "%Y%m%dT%H%M%SZ") {
        return Ok(ndt.date());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return Ok(day_from_utc(dt.with_timezone(&Utc)));
    }

    Err(CalendarError::InvalidDate(input.to_string()))
}

/// The final night stayed for an exclusive end date: `end - 1 day`.
pub fn last_occupied_night(end: NaiveDate) -> Result<NaiveDate> {
    end.pred_opt().ok_or_else(|| CalendarError::InvalidDate(end.to_string()))
}

/// Fail-soft conversion of loosely-typed feed events into typed intervals.
///
/// Events with unparseable dates are excluded with one warning each;
/// the remaining events convert normally. Interval-shape validation
/// (`end > start`) happens later, at index construction.
pub fn validate_events(
    events: &[RawFeedEvent],
) -> (Vec<ReservationInterval>, Vec<LayoutWarning>) {
    let mut intervals = Vec::with_capacity(events.len());
    let mut warnings = Vec::new();

    for event in events {
        let start = match normalize_to_calendar_day(&event.start) {
            Ok(day) => day,
            Err(err) => {
                warn!(uid = %event.uid, error = %err, "excluding feed event with bad start date");
                warnings.push(LayoutWarning { id: event.uid.clone(), message: err.to_string() });
                continue;
            }
        };
        let end = match normalize_to_calendar_day(&event.end) {
            Ok(day) => day,
            Err(err) => {
                warn!(uid = %event.uid, error = %err, "excluding feed event with bad end date");
                warnings.push(LayoutWarning { id: event.uid.clone(), message: err.to_string() });
                continue;
            }
        };

        let mut interval =
            ReservationInterval::new(event.uid.clone(), event.summary.clone(), start, end);
        if let Some(status) = event.status.as_deref().and_then(parse_status) {
            interval = interval.with_status(status);
        }
        intervals.push(interval);
    }

    (intervals, warnings)
}

fn parse_status(raw: &str) -> Option<ReservationStatus> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "confirmed" => Some(ReservationStatus::Confirmed),
        "tentative" => Some(ReservationStatus::Tentative),
        "blocked" => Some(ReservationStatus::Blocked),
        _ => None,
    }
}
