//! Cache Configuration Module
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: `capacity` is a `usize`, so a negative size cannot be
//!   expressed once a config exists
//! - **Validation at the edge**: signed capacities coming from outside the
//!   program go through `TryFrom<i64>` and are rejected, never clamped
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | `LruCacheConfig` | `ConcurrentLruCache` | Same config, single-lock wrapper (requires `concurrent`) |
//!
//! # Examples
//!
//! ```
//! use simple_lru::config::LruCacheConfig;
//! use simple_lru::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.cap(), 1000);
//!
//! // Capacities parsed from user input are validated.
//! assert!(LruCacheConfig::try_from(-1i64).is_err());
//! ```

pub mod lru;

pub use lru::LruCacheConfig;
