//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a bounded LRU cache with O(1) operations for all
//! common cache operations.
//!
//! # Algorithm
//!
//! The cache keeps its entries in order of recency of use. Every `get` or
//! `put` moves the touched entry to the front; when an insertion pushes the
//! entry count over capacity, entries are evicted from the back until the
//! cache fits again.
//!
//! # Layout
//!
//! ```text
//!   map: HashMap<K, Handle>          list: arena of (K, V) slots
//!   ┌──────────┬────────┐            ┌─────┐   ┌─────┐   ┌─────┐
//!   │ "apple"  │  #2  ──┼──────────▶ │ #2  │◀─▶│ #0  │◀─▶│ #1  │
//!   │ "banana" │  #0    │            └─────┘   └─────┘   └─────┘
//!   │ "cherry" │  #1    │             front                back
//!   └──────────┴────────┘             (MRU)                (LRU)
//! ```
//!
//! Handles are slot indices into the arena, so moving an entry to the front
//! only rewrites a few integers and never invalidates the map.
//!
//! # Performance Characteristics
//!
//! - Get: O(1)
//! - Put: O(1), plus O(1) per evicted entry
//! - Remove: O(1)
//!
//! # Eviction Callback
//!
//! A cache may carry a callback that receives every evicted `(key, value)`
//! pair, oldest first. The entry is fully removed *before* the callback runs,
//! so anything the callback observes about the cache already reflects the
//! eviction. Explicit removal (`remove`, `pop_lru`, `clear`) never invokes
//! the callback.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. Use
//! `ConcurrentLruCache` (feature `concurrent`) or wrap it in a lock.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::Result;
use crate::list::{self, Handle, List};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;
use tracing::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Callback invoked with each entry evicted for capacity.
///
/// The callback runs synchronously inside `put`. It must be `Send` so that a
/// cache carrying it can move between threads.
pub type EvictCallback<K, V> = Box<dyn FnMut(K, V) + Send>;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and removing entries. When an insertion takes the
/// cache over capacity, the least recently used entry is evicted.
///
/// # Examples
///
/// ```
/// use simple_lru::LruCache;
///
/// let mut cache = LruCache::new(2);
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<(K, V)>,
    map: HashMap<K, Handle, S>,
    on_evict: Option<EvictCallback<K, V>>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a cache holding at most `cap` entries.
    ///
    /// `cap == 0` is valid: every inserted entry is evicted immediately.
    pub fn new(cap: usize) -> Self {
        Self::init(LruCacheConfig::new(cap), None)
    }

    /// Creates a cache that reports every eviction to `on_evict`.
    ///
    /// # Example
    ///
    /// ```
    /// use simple_lru::LruCache;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let evicted = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&evicted);
    /// let mut cache = LruCache::with_evict(1, move |k, v| sink.lock().unwrap().push((k, v)));
    ///
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// assert_eq!(*evicted.lock().unwrap(), vec![("a", 1)]);
    /// ```
    pub fn with_evict<F>(cap: usize, on_evict: F) -> Self
    where
        F: FnMut(K, V) + Send + 'static,
    {
        Self::init(LruCacheConfig::new(cap), Some(Box::new(on_evict)))
    }

    /// Creates a cache from a configuration and an optional eviction callback.
    ///
    /// This is the recommended constructor when the capacity comes from
    /// configuration.
    pub fn init(config: LruCacheConfig, on_evict: Option<EvictCallback<K, V>>) -> Self {
        Self::init_with_hasher(config, DefaultHashBuilder::default(), on_evict)
    }

    /// Creates a cache from a signed capacity, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NegativeCapacity`](crate::CacheError::NegativeCapacity)
    /// if `capacity < 0`. The value is never clamped.
    ///
    /// ```
    /// use simple_lru::{CacheError, LruCache};
    ///
    /// let err = LruCache::<String, i32>::try_new(-1).unwrap_err();
    /// assert_eq!(err, CacheError::NegativeCapacity(-1));
    /// ```
    pub fn try_new(capacity: i64) -> Result<Self> {
        let config = LruCacheConfig::try_from(capacity)?;
        Ok(Self::init(config, None))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: usize, hash_builder: S) -> Self {
        Self::init_with_hasher(LruCacheConfig::new(cap), hash_builder, None)
    }

    /// Creates a cache from a configuration, hash builder and optional callback.
    pub fn init_with_hasher(
        config: LruCacheConfig,
        hash_builder: S,
        on_evict: Option<EvictCallback<K, V>>,
    ) -> Self {
        debug!(
            capacity = config.capacity,
            evict_callback = on_evict.is_some(),
            "creating LRU cache"
        );
        LruCache {
            config,
            list: List::with_capacity(config.capacity),
            map: HashMap::with_capacity_and_hasher(config.capacity, hash_builder),
            on_evict,
            metrics: LruCacheMetrics::new(config.capacity),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> usize {
        self.config.capacity
    }

    /// Returns the number of entries currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the live counters of this cache.
    #[inline]
    pub fn stats(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Looks up `key` and marks it most recently used.
    ///
    /// Returns `None` without touching any entry if the key is absent.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(handle) = self.map.get(key).copied() else {
            self.metrics.core.record_miss();
            return None;
        };
        self.list.move_to_front(handle);
        self.metrics.core.record_hit();
        self.list.get(handle).map(|(_, v)| v)
    }

    /// Like [`get`](Self::get), but hands out a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(handle) = self.map.get(key).copied() else {
            self.metrics.core.record_miss();
            return None;
        };
        self.list.move_to_front(handle);
        self.metrics.core.record_hit();
        self.list.get_mut(handle).map(|(_, v)| v)
    }

    /// Looks up `key` without changing its eviction priority.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.map.get(key).copied()?;
        self.list.get(handle).map(|(_, v)| v)
    }

    /// Returns `true` if `key` is cached. Recency is not updated.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the entry that the next eviction would drop.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.last().map(|(k, v)| (k, v))
    }

    /// Removes `key`, returning its value if it was present.
    ///
    /// Removing an absent key is a no-op. The eviction callback is not invoked.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.map.remove(key)?;
        self.metrics.core.record_removal();
        self.list.remove(handle).map(|(_, v)| v)
    }

    /// Removes and returns the least recently used entry.
    ///
    /// This is an explicit removal: the eviction callback is not invoked.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.remove_last()?;
        self.map.remove(&key);
        self.metrics.core.record_removal();
        Some((key, value))
    }

    /// Drops every entry without invoking the eviction callback.
    pub fn clear(&mut self) {
        trace!(len = self.map.len(), "clearing LRU cache");
        self.map.clear();
        self.list.clear();
    }

    /// Iterates over entries from most to least recently used.
    ///
    /// Iteration does not update recency.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Pops entries off the back until the cache fits its capacity.
    ///
    /// Each entry is unlinked and unindexed before the callback sees it.
    fn evict(&mut self) {
        while self.list.len() > self.config.capacity {
            let Some((key, value)) = self.list.remove_last() else {
                break;
            };
            self.map.remove(&key);
            self.metrics.core.record_eviction();
            trace!(
                len = self.list.len(),
                capacity = self.config.capacity,
                "evicted least recently used entry"
            );
            if let Some(on_evict) = self.on_evict.as_mut() {
                on_evict(key, value);
            }
        }
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or updates `key`, marking it most recently used.
    ///
    /// Updating an existing key replaces its value and returns the old one;
    /// the entry count is unchanged so nothing is evicted. Inserting a new key
    /// returns `None` and evicts from the back while the cache is over
    /// capacity, passing each victim to the eviction callback.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(handle) = self.map.get(&key).copied() {
            self.list.move_to_front(handle);
            self.metrics.core.record_update();
            return self
                .list
                .get_mut(handle)
                .map(|(_, old)| mem::replace(old, value));
        }

        let handle = self.list.add((key.clone(), value));
        self.map.insert(key, handle);
        self.metrics.core.record_insertion();
        self.evict();
        None
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .field("evict_callback", &self.on_evict.is_some())
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cache entries, most recently used first.
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
