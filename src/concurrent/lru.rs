//! Concurrent LRU Cache Implementation
//!
//! A thread-safe LRU cache built from one [`LruCache`](crate::LruCache) and
//! one `parking_lot::Mutex`. This is the multi-threaded counterpart to the
//! single-threaded cache and exposes the same operations through `&self`.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │          ConcurrentLruCache          │
//! │  ┌────────────────────────────────┐  │
//! │  │             Mutex              │  │
//! │  │  ┌──────────────────────────┐  │  │
//! │  │  │  LruCache (map + arena)  │  │  │
//! │  │  └──────────────────────────┘  │  │
//! │  └────────────────────────────────┘  │
//! └──────────────────────────────────────┘
//! ```
//!
//! Recency order is global: unlike a sharded design, the entry evicted is
//! always the least recently used one in the whole cache.
//!
//! # Performance Characteristics
//!
//! | Metric | Value |
//! |--------|-------|
//! | Get/Put/Remove | O(1) plus lock acquisition |
//! | Concurrency | Fully serialized, one operation at a time |
//! | Memory overhead | One `Mutex` on top of `LruCache` |
//!
//! # Thread Safety
//!
//! `ConcurrentLruCache` is `Send + Sync` when `K`, `V` and `S` are `Send`,
//! and can be shared via `Arc`.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::Result;
use crate::lru::{EvictCallback, LruCache};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LRU cache guarded by a single exclusive lock.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq`, plus `Clone` to insert.
/// - `V`: Value type. Lookups that return owned values need `Clone`.
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
///
/// # Eviction Callback
///
/// The callback runs on the thread that called `put`, **while the lock is
/// held**. It must not call back into the same cache, or it will deadlock.
///
/// # Example
///
/// ```rust
/// use simple_lru::ConcurrentLruCache;
/// use std::sync::Arc;
///
/// let cache = Arc::new(ConcurrentLruCache::new(2));
///
/// cache.put("key".to_string(), 42);
/// assert_eq!(cache.get("key"), Some(42));
/// assert_eq!(cache.get_with("key", |v| v * 2), Some(84));
/// ```
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<LruCache<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLruCache<K, V, DefaultHashBuilder> {
    /// Creates a concurrent cache holding at most `cap` entries.
    pub fn new(cap: usize) -> Self {
        Self::from(LruCache::new(cap))
    }

    /// Creates a concurrent cache that reports evictions to `on_evict`.
    ///
    /// See the type-level docs for the locking rules the callback runs under.
    pub fn with_evict<F>(cap: usize, on_evict: F) -> Self
    where
        F: FnMut(K, V) + Send + 'static,
    {
        Self::from(LruCache::with_evict(cap, on_evict))
    }

    /// Creates a concurrent cache from a configuration and optional callback.
    ///
    /// This is the **recommended** way to create a concurrent LRU cache.
    pub fn init(config: LruCacheConfig, on_evict: Option<EvictCallback<K, V>>) -> Self {
        Self::from(LruCache::init(config, on_evict))
    }

    /// Creates a concurrent cache from a signed capacity.
    ///
    /// # Errors
    ///
    /// Fails with [`CacheError::NegativeCapacity`](crate::CacheError::NegativeCapacity)
    /// when `capacity < 0`; no cache is built in that case.
    pub fn try_new(capacity: i64) -> Result<Self> {
        LruCache::try_new(capacity).map(Self::from)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Creates a concurrent cache with a custom hash builder.
    pub fn init_with_hasher(
        config: LruCacheConfig,
        hash_builder: S,
        on_evict: Option<EvictCallback<K, V>>,
    ) -> Self {
        Self::from(LruCache::init_with_hasher(config, hash_builder, on_evict))
    }

    /// Returns the maximum number of entries.
    pub fn cap(&self) -> usize {
        self.inner.lock().cap()
    }

    /// Returns the number of entries currently held.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Retrieves a value from the cache and marks it most recently used.
    ///
    /// Returns a **clone** of the value so the lock is released on return.
    /// For operations that don't need ownership, use
    /// [`get_with()`](Self::get_with) instead.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Retrieves a value and applies `f` to it while holding the lock.
    ///
    /// More efficient than `get()` when only part of the value is needed.
    /// The entry is marked most recently used.
    ///
    /// ```rust
    /// use simple_lru::ConcurrentLruCache;
    ///
    /// let cache = ConcurrentLruCache::new(4);
    /// cache.put("greeting".to_string(), "hello world".to_string());
    /// assert_eq!(cache.get_with("greeting", |v| v.len()), Some(11));
    /// ```
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    /// Applies `f` to a mutable reference to the value, in place.
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.inner.lock().get_mut(key).map(f)
    }

    /// Returns a clone of the value without updating recency.
    ///
    /// This still takes the exclusive lock.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// Applies `f` to the value without updating recency.
    pub fn peek_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().peek(key).map(f)
    }

    /// Checks whether the cache contains a key, without updating recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains(key)
    }

    /// Removes a key from the cache.
    ///
    /// # Returns
    ///
    /// - `Some(value)` if the key existed
    /// - `None` if the key was not found
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remove(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.inner.lock().pop_lru()
    }

    /// Removes all entries without invoking the eviction callback.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> LruCacheMetrics {
        self.inner.lock().stats().clone()
    }

    /// Consumes the wrapper and returns the underlying cache.
    pub fn into_inner(self) -> LruCache<K, V, S> {
        self.inner.into_inner()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Inserts or updates a key-value pair.
    ///
    /// If the key exists, the value is replaced and the old one returned.
    /// Otherwise the entry is inserted and, if the cache is over capacity,
    /// the least recently used entries are evicted under the lock.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().put(key, value)
    }
}

impl<K, V, S> From<LruCache<K, V, S>> for ConcurrentLruCache<K, V, S> {
    fn from(cache: LruCache<K, V, S>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for ConcurrentLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLRU"
    }
}

impl<K, V, S> fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(cache) => f
                .debug_struct("ConcurrentLruCache")
                .field("inner", &*cache)
                .finish(),
            None => f
                .debug_struct("ConcurrentLruCache")
                .field("inner", &"<locked>")
                .finish(),
        }
    }
}
