//! Concurrent Cache Implementation
//!
//! This module provides [`ConcurrentLruCache`], a thread-safe wrapper that
//! puts a single [`LruCache`](crate::LruCache) behind one
//! `parking_lot::Mutex`.
//!
//! # Why Mutex Instead of RwLock?
//!
//! LRU needs **mutable access even for read operations**: every `get()` moves
//! the accessed entry to the front of the recency list. Since `get()` is a
//! write, an `RwLock` would hand out write locks for every access anyway.
//! `Mutex` has less bookkeeping and makes it explicit that all operations are
//! mutually exclusive.
//!
//! # Lock Scope
//!
//! Each public method takes the lock, runs exactly one core operation and
//! releases it before returning. Values are handed out as clones (or through
//! a closure run under the lock) so no guard escapes. The one piece of caller
//! code that runs under the lock is the eviction callback:
//!
//! ```text
//!   put(k, v) ──▶ lock ──▶ LruCache::put ──▶ evict ──▶ on_evict(k', v') ──▶ unlock
//!                                                      ▲
//!                                  runs on the caller's thread, lock held
//! ```
//!
//! Keep callbacks short. A callback that calls back into the same
//! `ConcurrentLruCache` deadlocks.
//!
//! # Example
//!
//! ```rust
//! use simple_lru::ConcurrentLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(1000));
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             let key = format!("key_{}_{}", t, i);
//!             cache.put(key.clone(), i);
//!             let _ = cache.get(&key);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 400);
//! ```

mod lru;

pub use self::lru::ConcurrentLruCache;
