//! Index Module
//!
//! Key to node-handle mapping used to jump straight into the recency list.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::Handle;

// == Index ==
/// Maps each resident key to the handle of its node.
///
/// The index never owns entry data, only the handle.
#[derive(Debug)]
pub struct Index<K> {
    handles: HashMap<K, Handle>,
}

impl<K> Default for Index<K> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq> Index<K> {
    // == Constructor ==
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            handles: HashMap::with_capacity(capacity),
        }
    }

    // == Lookup ==
    pub fn lookup<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.handles.get(key).copied()
    }

    // == Insert ==
    /// Records the handle for a key that must not already be present.
    ///
    /// A duplicate trips a debug assertion; release builds keep the newer handle.
    pub fn insert(&mut self, key: K, handle: Handle) {
        let previous = self.handles.insert(key, handle);
        debug_assert!(previous.is_none(), "index already held this key");
    }

    // == Delete ==
    pub fn delete<Q>(&mut self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.handles.remove(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.handles.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }
}
