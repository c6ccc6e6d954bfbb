//! Cache Statistics Module
//!
//! Hit, miss and eviction counters kept alongside an [`LruCache`](super::LruCache).

use serde::Serialize;

// == Cache Stats ==
/// Counters describing how a cache has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups that found a resident key
    pub hits: u64,
    /// Lookups that found nothing (including loader-served misses)
    pub misses: u64,
    /// Entries dropped to make room for a new key
    pub evictions: u64,
    /// Resident entries at the time the snapshot was taken
    pub total_entries: usize,
    /// Fixed upper bound on resident entries
    pub capacity: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Zeroed counters for a cache of the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// hits / (hits + misses), or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Copy of the counters with the resident count filled in.
    pub(crate) fn snapshot(&self, total_entries: usize) -> Self {
        Self {
            total_entries,
            ..*self
        }
    }
}
