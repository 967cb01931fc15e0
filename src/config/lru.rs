//! Configuration for the Least Recently Used (LRU) cache.
//!
//! The cache is bounded by entry count only. A capacity of zero is accepted
//! and yields a cache that evicts every entry as soon as it is inserted,
//! which is occasionally useful to switch caching off without changing the
//! calling code.

use crate::error::{CacheError, Result};
use core::fmt;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. `0` is valid.
///
/// # Examples
///
/// ```
/// use simple_lru::config::LruCacheConfig;
/// use simple_lru::LruCache;
///
/// let config = LruCacheConfig { capacity: 10_000 };
/// let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None);
/// assert!(cache.is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl LruCacheConfig {
    /// Creates a configuration for a cache holding at most `capacity` entries.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the configured capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl TryFrom<i64> for LruCacheConfig {
    type Error = CacheError;

    /// Validates a signed capacity.
    ///
    /// Negative values are rejected with [`CacheError::NegativeCapacity`];
    /// values larger than `usize::MAX` with [`CacheError::CapacityOverflow`].
    fn try_from(capacity: i64) -> Result<Self> {
        if capacity < 0 {
            return Err(CacheError::NegativeCapacity(capacity));
        }
        let capacity =
            usize::try_from(capacity).map_err(|_| CacheError::CapacityOverflow(capacity))?;
        Ok(Self::new(capacity))
    }
}

impl From<usize> for LruCacheConfig {
    fn from(capacity: usize) -> Self {
        Self::new(capacity)
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
