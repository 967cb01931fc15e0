//! Common Cache Interface
//!
//! [`Cache`] is the operation set shared by [`LruCache`] and, with the
//! `concurrent` feature, `ConcurrentLruCache`. Code that only needs to store
//! and look up values can be written once against the trait and handed
//! either variant.
//!
//! ```text
//!              ┌──────────────────────────────┐
//!              │        Cache<K, V>           │
//!              │  put / get / peek / remove   │
//!              │  clear / len / is_empty / cap│
//!              └──────────────┬───────────────┘
//!                 ┌───────────┴───────────┐
//!                 ▼                       ▼
//!         LruCache<K, V, S>     ConcurrentLruCache<K, V, S>
//!         (no locking)          (one Mutex around LruCache)
//! ```
//!
//! Lookups return owned clones so that both variants can share one
//! signature: the concurrent cache cannot hand out references that outlive
//! its lock. Use the inherent methods when borrowing is preferable.
//!
//! The trait is object safe:
//!
//! ```
//! use simple_lru::{Cache, LruCache};
//!
//! let mut cache: Box<dyn Cache<&str, i32>> = Box::new(LruCache::new(1));
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.len(), 1);
//! ```

use crate::lru::LruCache;
use core::hash::{BuildHasher, Hash};

/// Bounded key-value cache operations.
pub trait Cache<K, V> {
    /// Inserts or updates `key`, returning the previous value on update.
    ///
    /// May evict other entries if the cache is over capacity afterwards.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Returns a copy of the value for `key`, marking it most recently used.
    fn get(&mut self, key: &K) -> Option<V>;

    /// Returns a copy of the value for `key` without updating recency.
    fn peek(&self, key: &K) -> Option<V>;

    /// Removes `key`, returning its value if present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes every entry.
    fn clear(&mut self);

    /// Number of entries currently held.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries the cache holds.
    fn cap(&self) -> usize;
}

impl<K, V, S> Cache<K, V> for LruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    #[inline]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        LruCache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<V> {
        LruCache::get(self, key).cloned()
    }

    #[inline]
    fn peek(&self, key: &K) -> Option<V> {
        LruCache::peek(self, key).cloned()
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }

    #[inline]
    fn clear(&mut self) {
        LruCache::clear(self)
    }

    #[inline]
    fn len(&self) -> usize {
        LruCache::len(self)
    }

    #[inline]
    fn cap(&self) -> usize {
        LruCache::cap(self)
    }
}

#[cfg(feature = "concurrent")]
impl<K, V, S> Cache<K, V> for crate::concurrent::ConcurrentLruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        crate::concurrent::ConcurrentLruCache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<V> {
        crate::concurrent::ConcurrentLruCache::get(self, key)
    }

    fn peek(&self, key: &K) -> Option<V> {
        crate::concurrent::ConcurrentLruCache::peek(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        crate::concurrent::ConcurrentLruCache::remove(self, key)
    }

    fn clear(&mut self) {
        crate::concurrent::ConcurrentLruCache::clear(self)
    }

    fn len(&self) -> usize {
        crate::concurrent::ConcurrentLruCache::len(self)
    }

    fn cap(&self) -> usize {
        crate::concurrent::ConcurrentLruCache::cap(self)
    }
}
