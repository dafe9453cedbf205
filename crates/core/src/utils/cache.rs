//! Layout memoization cache
//!
//! Recomputing a layout costs `O(days x avg intervals/day)` on every UI
//! re-render, so callers keep a small bounded cache keyed by the structural
//! hash of `(intervals, window)`. The cache is caller-owned state - there is
//! no module-level or global cache - and purely an optimization: a miss just
//! recomputes the pure function.

use std::sync::Arc;

use ahash::AHashMap;
use staygrid_domain::constants::DEFAULT_LAYOUT_CACHE_CAPACITY;
use staygrid_domain::{CalendarLayout, ReservationInterval, Result, VisibleWindow};
use tracing::trace;

use crate::calendar::layout::{compute_calendar_layout, layout_key};

/// Bounded memo cache with insertion-order eviction.
#[derive(Debug)]
pub struct LayoutCache {
    entries: AHashMap<u64, Arc<CalendarLayout>>,
    insertion_order: Vec<u64>,
    capacity: usize,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new(DEFAULT_LAYOUT_CACHE_CAPACITY)
    }
}

impl LayoutCache {
    /// Create a cache retaining at most `capacity` layouts.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: AHashMap::with_capacity(capacity),
            insertion_order: Vec::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Return the memoized layout for `(intervals, window)`, computing and
    /// storing it on a miss.
    pub fn get_or_compute(
        &mut self,
        intervals: &[ReservationInterval],
        window: &VisibleWindow,
    ) -> Result<Arc<CalendarLayout>> {
        let key = layout_key(intervals, window);
        if let Some(layout) = self.entries.get(&key) {
            trace!(key, "layout cache hit");
            return Ok(Arc::clone(layout));
        }

        trace!(key, "layout cache miss");
        let layout = Arc::new(compute_calendar_layout(intervals, window)?);
        self.insert(key, Arc::clone(&layout));
        Ok(layout)
    }

    /// Drop every memoized layout, e.g. after a forced feed refresh.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: u64, layout: Arc<CalendarLayout>) {
        if self.entries.len() >= self.capacity {
            if !self.insertion_order.is_empty() {
                let oldest = self.insertion_order.remove(0);
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(key, layout);
        self.insertion_order.push(key);
    }
}
