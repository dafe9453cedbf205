//! Port interfaces for the external reservation feed
//!
//! Fetching, parsing, and caching the remote iCal feed live outside this
//! engine; these traits are the seam. Implementations must hand over a fully
//! materialized event list before each layout computation.

use async_trait::async_trait;
use staygrid_domain::{RawFeedEvent, Result};

/// Result of a forced feed refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedRefresh {
    pub events_count: usize,
}

/// Trait for the reservation-feed collaborator.
#[async_trait]
pub trait ReservationFeed: Send + Sync {
    /// Current cached snapshot of the property's reservation events,
    /// possibly stale.
    async fn fetch_reservation_intervals(&self, property_id: &str) -> Result<Vec<RawFeedEvent>>;

    /// Force a cache bypass and re-fetch/re-parse of the remote feed.
    ///
    /// The engine is re-invoked with the fresh snapshot afterwards.
    async fn refresh_reservation_intervals(&self, property_id: &str) -> Result<FeedRefresh>;
}
