// SPDX-License-Identifier: MPL-2.0
//! In-memory cache of preview images fetched from the gallery service.
//!
//! Each file name goes through `Pending` (request in flight) and then
//! `Ready` or `Failed`. A file name present in the cache, whatever its state,
//! is never requested again; once evicted it may be requested anew.

use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::ops::Range;

use crate::app::config::DEFAULT_PREVIEW_CACHE_SIZE;

/// State of one preview.
#[derive(Debug, Clone)]
pub enum PreviewEntry {
    Pending,
    Ready(Handle),
    Failed,
}

/// LRU cache of decoded preview handles keyed by file name.
#[derive(Debug)]
pub struct PreviewCache {
    entries: LruCache<String, PreviewEntry>,
}

impl Default for PreviewCache {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_CACHE_SIZE)
    }
}

impl PreviewCache {
    /// Creates a cache holding at most `capacity` previews (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Marks `file_name` as requested.
    ///
    /// Returns `true` when the caller should start a fetch, `false` when the
    /// preview is already pending, ready or known to fail.
    pub fn request(&mut self, file_name: &str) -> bool {
        if self.entries.contains(file_name) {
            self.entries.promote(file_name);
            return false;
        }
        self.entries.put(file_name.to_string(), PreviewEntry::Pending);
        true
    }

    /// Stores the outcome of a fetch started by [`request`](Self::request).
    pub fn complete(&mut self, file_name: &str, handle: Option<Handle>) {
        let entry = match handle {
            Some(handle) => PreviewEntry::Ready(handle),
            None => PreviewEntry::Failed,
        };
        self.entries.put(file_name.to_string(), entry);
    }

    /// The ready preview for `file_name`, without touching LRU order.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&Handle> {
        match self.entries.peek(file_name) {
            Some(PreviewEntry::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn entry(&self, file_name: &str) -> Option<&PreviewEntry> {
        self.entries.peek(file_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indices of the catalog worth having in cache around `selected`.
    ///
    /// The window holds at most `capacity` items and is centered on the
    /// selection, shifted to stay inside `0..len`.
    #[must_use]
    pub fn window(&self, selected: usize, len: usize) -> Range<usize> {
        prefetch_window(selected, len, self.capacity())
    }
}

fn prefetch_window(selected: usize, len: usize, capacity: usize) -> Range<usize> {
    let size = capacity.min(len);
    if size == 0 {
        return 0..0;
    }
    let selected = selected.min(len - 1);
    let start = selected.saturating_sub(size / 2).min(len - size);
    start..start + size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![255_u8; 4])
    }

    #[test]
    fn first_request_starts_fetch_second_does_not() {
        let mut cache = PreviewCache::new(4);
        assert!(cache.request("a.jpg"));
        assert!(!cache.request("a.jpg"));
        assert!(matches!(cache.entry("a.jpg"), Some(PreviewEntry::Pending)));
    }

    #[test]
    fn completed_preview_is_available() {
        let mut cache = PreviewCache::new(4);
        cache.request("a.jpg");
        cache.complete("a.jpg", Some(handle()));
        assert!(cache.get("a.jpg").is_some());
        assert!(!cache.request("a.jpg"));
    }

    #[test]
    fn failed_preview_is_not_retried_while_cached() {
        let mut cache = PreviewCache::new(4);
        cache.request("broken.jpg");
        cache.complete("broken.jpg", None);
        assert!(cache.get("broken.jpg").is_none());
        assert!(!cache.request("broken.jpg"));
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut cache = PreviewCache::new(2);
        cache.request("a.jpg");
        cache.request("b.jpg");
        // Touch a so that b becomes the eviction candidate.
        cache.request("a.jpg");
        cache.request("c.jpg");

        assert_eq!(cache.len(), 2);
        assert!(cache.entry("b.jpg").is_none());
        assert!(cache.request("b.jpg"));
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let cache = PreviewCache::new(0);
        assert_eq!(cache.capacity(), 1);
    }

    #[test]
    fn window_is_centered_and_clamped() {
        assert_eq!(prefetch_window(0, 10, 4), 0..4);
        assert_eq!(prefetch_window(5, 10, 4), 3..7);
        assert_eq!(prefetch_window(9, 10, 4), 6..10);
        assert_eq!(prefetch_window(3, 2, 4), 0..2);
        assert_eq!(prefetch_window(0, 0, 4), 0..0);
    }
}
