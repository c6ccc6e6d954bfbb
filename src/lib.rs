//! LRU Store - a fixed-capacity least-recently-used cache
//!
//! The [`cache`] module holds the cache core. [`api`] serves a small price
//! catalog over HTTP on top of a shared cache instance.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{LruCache, SharedCache};
pub use config::Config;
pub use error::{ApiError, CacheError};
