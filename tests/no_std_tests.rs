#![no_std]
extern crate alloc;
extern crate simple_lru;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use simple_lru::config::LruCacheConfig;
use simple_lru::{Cache, EvictCallback, LruCache};

// Helper built with the init pattern
fn make_lru<K: core::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig { capacity: cap };
    LruCache::init(config, None)
}

#[test]
fn test_lru_in_no_std() {
    let mut cache = make_lru(2);

    cache.put(String::from("key1"), 1);
    cache.put(String::from("key2"), 2);

    assert_eq!(cache.get("key1"), Some(&1));
    assert_eq!(cache.get("key2"), Some(&2));

    // key1 was touched first, so it is the oldest now
    cache.put(String::from("key3"), 3);

    assert_eq!(cache.get("key1"), None);
    assert_eq!(cache.get("key2"), Some(&2));
    assert_eq!(cache.get("key3"), Some(&3));
}

#[test]
fn test_lru_iter_in_no_std() {
    let mut cache = make_lru(3);
    for i in 0..3 {
        cache.put(format!("k{}", i), i);
    }
    cache.get("k0");

    let keys: Vec<&str> = cache.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["k0", "k2", "k1"]);
}

#[test]
fn test_lru_callback_in_no_std() {
    // No std Mutex here, so count through a static.
    static EVICTED: core::sync::atomic::AtomicUsize = core::sync::atomic::AtomicUsize::new(0);

    let on_evict: EvictCallback<u32, u32> = Box::new(|_k, _v| {
        EVICTED.fetch_add(1, core::sync::atomic::Ordering::SeqCst);
    });
    let mut cache = LruCache::init(LruCacheConfig::new(1), Some(on_evict));

    cache.put(1, 1);
    cache.put(2, 2);
    cache.put(3, 3);

    assert_eq!(EVICTED.load(core::sync::atomic::Ordering::SeqCst), 2);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_trait_object_in_no_std() {
    let mut cache: Box<dyn Cache<u64, u64>> = Box::new(make_lru::<u64, u64>(4));
    for i in 0..8 {
        cache.put(i, i * i);
    }
    assert_eq!(cache.len(), 4);
    assert_eq!(cache.peek(&7), Some(49));
    assert_eq!(cache.peek(&3), None);
}
