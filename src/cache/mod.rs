//! Cache Module
//!
//! Fixed-capacity LRU cache built from a hash index over an arena-backed
//! recency list, plus a lock-guarded handle for sharing it.

mod entry;
mod index;
mod list;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::Entry;
pub use index::Index;
pub use list::{Handle, Iter, RecencyList};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::LruCache;
