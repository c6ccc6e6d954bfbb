//! Cache Entry Module
//!
//! The key/value pair owned by a single node of the recency list.

// == Entry ==
/// A resident key and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}
