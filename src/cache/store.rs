//! Cache Store Module
//!
//! The LRU cache itself: an [`Index`] for O(1) key lookup composed with a
//! [`RecencyList`] that owns every entry in least-to-most-recent order.

use std::borrow::Borrow;
use std::hash::Hash;

use tracing::debug;

use crate::cache::list::PREALLOC_LIMIT;
use crate::cache::{CacheStats, Entry, Handle, Index, RecencyList};
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// Fixed-capacity key-value store evicting the least recently used entry.
///
/// Both `get` and `put` count as a use. The cache is not synchronized; wrap it
/// in a [`SharedCache`](super::SharedCache) to share it between threads.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to node handle
    index: Index<K>,
    /// Entries ordered from least (front) to most (back) recently used
    list: RecencyList<Entry<K, V>>,
    /// Usage counters
    stats: CacheStats,
    /// Maximum number of resident entries, fixed at construction
    capacity: usize,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Storage grows with residency; only a bounded amount is reserved here.
    ///
    /// # Errors
    /// `CacheError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity);
        }

        let reserve = capacity.min(PREALLOC_LIMIT);
        Ok(Self {
            index: Index::with_capacity(reserve),
            list: RecencyList::with_capacity(reserve),
            stats: CacheStats::new(capacity),
            capacity,
        })
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss leaves the recency order untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(handle) = self.index.lookup(key) else {
            self.stats.record_miss();
            return Err(CacheError::NotFound);
        };

        self.stats.record_hit();
        self.list.move_to_back(handle);
        Ok(&self.resident(handle).value)
    }

    // == Put ==
    /// Inserts or overwrites `key`, marking it most recently used.
    ///
    /// Inserting a new key into a full cache first evicts the least recently
    /// used entry.
    pub fn put(&mut self, key: K, value: V) {
        match self.index.lookup(&key) {
            Some(handle) => {
                self.resident_mut(handle).value = value;
                self.list.move_to_back(handle);
            }
            None => {
                self.insert_new(key, value);
            }
        }
    }

    // == Get Or Insert With ==
    /// Read-through lookup.
    ///
    /// On a miss, `loader` is consulted; a successful result is inserted as if
    /// by [`put`](Self::put) and returned. A failed load leaves the cache as it was.
    pub fn get_or_insert_with<F, E>(&mut self, key: K, loader: F) -> std::result::Result<&V, E>
    where
        F: FnOnce(&K) -> std::result::Result<V, E>,
    {
        let handle = match self.index.lookup(&key) {
            Some(handle) => {
                self.stats.record_hit();
                self.list.move_to_back(handle);
                handle
            }
            None => {
                self.stats.record_miss();
                let value = loader(&key)?;
                self.insert_new(key, value)
            }
        };

        Ok(&self.resident(handle).value)
    }

    // == Replace ==
    /// Overwrites the value of a resident key and marks it most recently used.
    ///
    /// Returns the previous value; absent keys are not inserted.
    pub fn replace<Q>(&mut self, key: &Q, value: V) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.index.lookup(key).ok_or(CacheError::NotFound)?;
        self.list.move_to_back(handle);
        Ok(std::mem::replace(&mut self.resident_mut(handle).value, value))
    }

    // == Remove ==
    /// Removes `key` wherever it sits in the recency order.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.index.delete(key).ok_or(CacheError::NotFound)?;
        let entry = match self.list.remove(handle) {
            Some(entry) => entry,
            None => unreachable!("index held a handle to a released node"),
        };

        self.check_lockstep();
        Ok(entry.value)
    }

    // == Peek ==
    /// Returns the value without touching recency or stats.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .lookup(key)
            .map(|handle| &self.resident(handle).value)
    }

    /// Checks residency without touching recency or stats.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains(key)
    }

    /// Iterates resident entries from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Stats ==
    /// Current counters with `total_entries` filled in.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    // == Internals ==
    fn insert_new(&mut self, key: K, value: V) -> Handle {
        if self.index.len() >= self.capacity {
            self.evict_lru();
        }

        let handle = self.list.push_back(Entry::new(key.clone(), value));
        self.index.insert(key, handle);
        self.check_lockstep();
        handle
    }

    fn evict_lru(&mut self) {
        match self.list.pop_front() {
            Ok(victim) => {
                let removed = self.index.delete(&victim.key);
                debug_assert!(removed.is_some(), "evicted key missing from index");
                self.stats.record_eviction();
                debug!(
                    capacity = self.capacity,
                    "evicted least recently used entry"
                );
            }
            // The index reports a full cache, so the list cannot be empty.
            Err(err) => unreachable!("index and recency list diverged: {err}"),
        }
    }

    fn resident(&self, handle: Handle) -> &Entry<K, V> {
        match self.list.get(handle) {
            Some(entry) => entry,
            None => unreachable!("index held a handle to a released node"),
        }
    }

    fn resident_mut(&mut self, handle: Handle) -> &mut Entry<K, V> {
        match self.list.get_mut(handle) {
            Some(entry) => entry,
            None => unreachable!("index held a handle to a released node"),
        }
    }

    fn check_lockstep(&self) {
        debug_assert_eq!(
            self.index.len(),
            self.list.len(),
            "index and recency list out of step"
        );
        debug_assert!(self.list.len() <= self.capacity);
    }
}
