//! Availability service - feed snapshot in, rendered layout out

use std::sync::Arc;

use staygrid_domain::{CalendarLayout, LayoutWarning, Result, VisibleWindow};
use tracing::info;

use super::ports::{FeedRefresh, ReservationFeed};
use crate::calendar::normalize::validate_events;
use crate::utils::cache::LayoutCache;

/// A computed layout plus the warnings raised while validating the feed
/// snapshot it was computed from.
///
/// Layout warnings (malformed intervals) travel inside the layout itself;
/// feed warnings (unparseable dates) are collected at the normalization
/// boundary and ride alongside.
#[derive(Debug, Clone)]
pub struct PropertyCalendar {
    pub layout: Arc<CalendarLayout>,
    pub feed_warnings: Vec<LayoutWarning>,
}

/// Availability service: fetches the reservation snapshot through the feed
/// port, validates it, and computes (or memoizes) the calendar layout.
pub struct AvailabilityService {
    feed: Arc<dyn ReservationFeed>,
    cache: LayoutCache,
}

impl AvailabilityService {
    /// Create a new availability service with the default cache capacity.
    pub fn new(feed: Arc<dyn ReservationFeed>) -> Self {
        Self { feed, cache: LayoutCache::default() }
    }

    /// Override the memo cache capacity (builder style).
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = LayoutCache::new(capacity);
        self
    }

    /// Compute the calendar layout for a property over a visible window.
    pub async fn layout_for(
        &mut self,
        property_id: &str,
        window: &VisibleWindow,
    ) -> Result<PropertyCalendar> {
        let events = self.feed.fetch_reservation_intervals(property_id).await?;
        let (intervals, feed_warnings) = validate_events(&events);
        let layout = self.cache.get_or_compute(&intervals, window)?;
        Ok(PropertyCalendar { layout, feed_warnings })
    }

    /// Force a feed refresh and drop every memoized layout so the next
    /// computation sees the fresh snapshot.
    pub async fn refresh(&mut self, property_id: &str) -> Result<FeedRefresh> {
        let refresh = self.feed.refresh_reservation_intervals(property_id).await?;
        info!(property_id, events_count = refresh.events_count, "reservation feed refreshed");
        self.cache.clear();
        Ok(refresh)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use staygrid_domain::{CalendarError, DayRole, RawFeedEvent};

    use super::*;

    struct FakeFeed {
        events: Vec<RawFeedEvent>,
        fetches: AtomicUsize,
        refreshes: AtomicUsize,
    }

    impl FakeFeed {
        fn new(events: Vec<RawFeedEvent>) -> Self {
            Self { events, fetches: AtomicUsize::new(0), refreshes: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl ReservationFeed for FakeFeed {
        async fn fetch_reservation_intervals(
            &self,
            _property_id: &str,
        ) -> Result<Vec<RawFeedEvent>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.events.clone())
        }

        async fn refresh_reservation_intervals(&self, _property_id: &str) -> Result<FeedRefresh> {
            self.refreshes.fetch_add(1, Ordering::SeqCst);
            Ok(FeedRefresh { events_count: self.events.len() })
        }
    }

    struct BrokenFeed;

    #[async_trait]
    impl ReservationFeed for BrokenFeed {
        async fn fetch_reservation_intervals(
            &self,
            _property_id: &str,
        ) -> Result<Vec<RawFeedEvent>> {
            Err(CalendarError::Feed("connection reset".into()))
        }

        async fn refresh_reservation_intervals(&self, _property_id: &str) -> Result<FeedRefresh> {
            Err(CalendarError::Feed("connection reset".into()))
        }
    }

    fn event(uid: &str, start: &str, end: &str) -> RawFeedEvent {
        RawFeedEvent {
            uid: uid.into(),
            summary: format!("Stay {uid}"),
            start: start.into(),
            end: end.into(),
            status: None,
        }
    }

    fn august() -> VisibleWindow {
        VisibleWindow::new(
            NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
        )
    }

    #[tokio::test]
    async fn layout_for_fetches_validates_and_computes() {
        let feed = Arc::new(FakeFeed::new(vec![
            event("good", "2024-08-01", "2024-08-05"),
            event("bad-date", "whenever", "2024-08-09"),
        ]));
        let mut service = AvailabilityService::new(feed.clone() as Arc<dyn ReservationFeed>);

        let calendar = service.layout_for("prop-1", &august()).await.unwrap();

        assert_eq!(calendar.feed_warnings.len(), 1);
        assert_eq!(calendar.feed_warnings[0].id, "bad-date");

        let check_in = calendar
            .layout
            .months
            .iter()
            .flat_map(|m| m.weeks.iter())
            .flat_map(|w| w.days.iter())
            .find(|c| c.date == NaiveDate::from_ymd_opt(2024, 8, 1).unwrap())
            .unwrap();
        assert_eq!(check_in.entries[0].role, DayRole::CheckIn);
    }

    #[tokio::test]
    async fn repeated_layouts_hit_the_memo_cache() {
        let feed = Arc::new(FakeFeed::new(vec![event("a", "2024-08-01", "2024-08-05")]));
        let mut service = AvailabilityService::new(feed.clone() as Arc<dyn ReservationFeed>);

        let first = service.layout_for("prop-1", &august()).await.unwrap();
        let second = service.layout_for("prop-1", &august()).await.unwrap();

        // Fetched twice (snapshots may go stale) but computed once.
        assert_eq!(feed.fetches.load(Ordering::SeqCst), 2);
        assert!(Arc::ptr_eq(&first.layout, &second.layout));
    }

    #[tokio::test]
    async fn refresh_reports_count_and_invalidates_the_cache() {
        let feed = Arc::new(FakeFeed::new(vec![event("a", "2024-08-01", "2024-08-05")]));
        let mut service = AvailabilityService::new(feed.clone() as Arc<dyn ReservationFeed>);

        let before = service.layout_for("prop-1", &august()).await.unwrap();
        let refresh = service.refresh("prop-1").await.unwrap();
        assert_eq!(refresh.events_count, 1);
        assert_eq!(feed.refreshes.load(Ordering::SeqCst), 1);

        let after = service.layout_for("prop-1", &august()).await.unwrap();
        // Same inputs, but the memo was dropped: a fresh allocation.
        assert!(!Arc::ptr_eq(&before.layout, &after.layout));
        assert_eq!(before.layout, after.layout);
    }

    #[tokio::test]
    async fn feed_failure_propagates() {
        let mut service = AvailabilityService::new(Arc::new(BrokenFeed));
        let err = service.layout_for("prop-1", &august()).await.unwrap_err();
        assert!(matches!(err, CalendarError::Feed(_)));
    }
}
