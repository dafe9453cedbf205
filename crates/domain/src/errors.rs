//! Error types used throughout the availability-calendar engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for StayGrid calendar computation
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CalendarError {
    /// Date input that could not be parsed into a calendar day
    #[error("invalid date input: {0}")]
    InvalidDate(String),

    /// Visible window whose last day precedes its first day
    #[error("empty window: last day {last} precedes first day {first}")]
    EmptyWindow { first: NaiveDate, last: NaiveDate },

    /// Reservation interval violating the exclusive-end invariant `end > start`
    #[error("malformed interval {id}: end {end} must be after start {start}")]
    MalformedInterval { id: String, start: NaiveDate, end: NaiveDate },

    /// Failure reported by the external reservation feed collaborator
    #[error("feed error: {0}")]
    Feed(String),
}

/// Result type alias for calendar operations
pub type Result<T> = std::result::Result<T, CalendarError>;
