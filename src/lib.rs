#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Type | Locking | Description |
//! |------|---------|-------------|
//! | [`LruCache`] | none | Bounded LRU cache, `&mut self` API |
//! | `ConcurrentLruCache` | one `Mutex` | Same contract through `&self` (feature `concurrent`) |
//! | [`Cache`] | n/a | Trait implemented by both |
//!
//! ## Performance Characteristics
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `get` / `peek` | O(1) |
//! | `put` | O(1) + O(1) per evicted entry |
//! | `remove` / `pop_lru` | O(1) |
//! | `clear` | O(n) drops |
//!
//! ## Eviction Callback
//!
//! ```rust
//! use simple_lru::LruCache;
//! use std::sync::mpsc;
//!
//! let (tx, rx) = mpsc::channel();
//! let mut cache = LruCache::with_evict(2, move |k, v| tx.send((k, v)).unwrap());
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3); // "b" is the least recently used entry
//!
//! assert_eq!(rx.try_recv(), Ok(("b", 2)));
//! ```
//!
//! ## Zero Capacity
//!
//! A cache built with capacity zero accepts writes but keeps nothing:
//!
//! ```rust
//! use simple_lru::LruCache;
//!
//! let mut cache = LruCache::new(0);
//! cache.put("a", 1);
//! assert_eq!(cache.len(), 0);
//! assert_eq!(cache.get(&"a"), None);
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: the single-threaded cache
//! - [`traits`]: the [`Cache`] trait shared by both variants
//! - [`config`]: configuration structures
//! - [`error`]: construction errors
//! - [`metrics`]: counters and reporting
//! - `concurrent`: the single-lock wrapper (requires `concurrent` feature)

#![no_std]

#[cfg(not(feature = "hashbrown"))]
extern crate std;

/// Arena-backed doubly linked list addressed by integer handles.
///
/// Internal infrastructure for the cache; not part of the public API.
pub(crate) mod list;

/// Error types for cache construction.
pub mod error;

/// Cache configuration structures.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is exceeded.
pub mod lru;

/// The operation set shared by every cache variant.
pub mod traits;

/// Cache metrics system.
///
/// Counters for hits, misses, insertions and evictions, reported through the
/// [`CacheMetrics`](metrics::CacheMetrics) trait.
pub mod metrics;

/// Thread-safe cache wrapper.
///
/// Puts a single [`LruCache`] behind one exclusive lock.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use config::LruCacheConfig;
pub use error::{CacheError, Result};
pub use lru::{EvictCallback, LruCache};
pub use traits::Cache;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;
