//! Property-Based Tests for LruCache
//!
//! Every sequence of operations is replayed against a plain `Vec` model that
//! keeps keys ordered from most to least recently used.

use proptest::prelude::*;
use simple_lru::LruCache;
use std::sync::{Arc, Mutex};

// == Strategies ==
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: u8, value: u32 },
    Get { key: u8 },
    Peek { key: u8 },
    Remove { key: u8 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // A small key space keeps hits, updates, and evictions frequent.
    let key = 0u8..16;
    prop_oneof![
        3 => (key.clone(), any::<u32>()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        2 => key.clone().prop_map(|key| CacheOp::Get { key }),
        1 => key.clone().prop_map(|key| CacheOp::Peek { key }),
        1 => key.prop_map(|key| CacheOp::Remove { key }),
    ]
}

/// Reference model: front is most recently used.
#[derive(Debug, Default)]
struct Model {
    cap: usize,
    entries: Vec<(u8, u32)>,
    evicted: Vec<(u8, u32)>,
}

impl Model {
    fn position(&self, key: u8) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    fn put(&mut self, key: u8, value: u32) -> Option<u32> {
        if let Some(pos) = self.position(key) {
            let (_, old) = self.entries.remove(pos);
            self.entries.insert(0, (key, value));
            return Some(old);
        }
        self.entries.insert(0, (key, value));
        while self.entries.len() > self.cap {
            if let Some(victim) = self.entries.pop() {
                self.evicted.push(victim);
            }
        }
        None
    }

    fn get(&mut self, key: u8) -> Option<u32> {
        let pos = self.position(key)?;
        let entry = self.entries.remove(pos);
        self.entries.insert(0, entry);
        Some(entry.1)
    }

    fn peek(&self, key: u8) -> Option<u32> {
        self.position(key).map(|pos| self.entries[pos].1)
    }

    fn remove(&mut self, key: u8) -> Option<u32> {
        let pos = self.position(key)?;
        Some(self.entries.remove(pos).1)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // The entry count never exceeds capacity after any operation.
    #[test]
    fn prop_len_never_exceeds_cap(
        cap in 0usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..200),
    ) {
        let mut cache = LruCache::new(cap);
        for op in ops {
            match op {
                CacheOp::Put { key, value } => { cache.put(key, value); }
                CacheOp::Get { key } => { cache.get(&key); }
                CacheOp::Peek { key } => { cache.peek(&key); }
                CacheOp::Remove { key } => { cache.remove(&key); }
            }
            prop_assert!(cache.len() <= cap);
            prop_assert_eq!(cache.iter().len(), cache.len());
        }
    }

    // Results, recency order, and eviction sequence match the model exactly.
    #[test]
    fn prop_matches_reference_model(
        cap in 0usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..200),
    ) {
        let evicted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&evicted);
        let mut cache = LruCache::with_evict(cap, move |k: u8, v: u32| {
            sink.lock().unwrap().push((k, v));
        });
        let mut model = Model { cap, ..Model::default() };

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    prop_assert_eq!(cache.put(key, value), model.put(key, value));
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key).copied(), model.get(key));
                }
                CacheOp::Peek { key } => {
                    prop_assert_eq!(cache.peek(&key).copied(), model.peek(key));
                }
                CacheOp::Remove { key } => {
                    prop_assert_eq!(cache.remove(&key), model.remove(key));
                }
            }

            let order: Vec<(u8, u32)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
            prop_assert_eq!(&order, &model.entries);
        }

        prop_assert_eq!(&*evicted.lock().unwrap(), &model.evicted);
    }

    // Inserting distinct keys evicts them in insertion order.
    #[test]
    fn prop_distinct_inserts_evict_fifo(cap in 1usize..16, extra in 0usize..32) {
        let evicted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&evicted);
        let mut cache = LruCache::with_evict(cap, move |k: usize, _v: ()| {
            sink.lock().unwrap().push(k);
        });

        for key in 0..cap + extra {
            cache.put(key, ());
        }

        let expected: Vec<usize> = (0..extra).collect();
        prop_assert_eq!(&*evicted.lock().unwrap(), &expected);
        prop_assert_eq!(cache.len(), cap);
        prop_assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(extra));
    }

    // A get on the oldest entry saves it from the next eviction.
    #[test]
    fn prop_get_protects_from_eviction(cap in 2usize..16) {
        let mut cache = LruCache::new(cap);
        for key in 0..cap {
            cache.put(key, key);
        }
        prop_assert_eq!(cache.get(&0), Some(&0));
        cache.put(cap, cap);
        prop_assert!(cache.contains(&0));
        prop_assert!(!cache.contains(&1));
    }
}
