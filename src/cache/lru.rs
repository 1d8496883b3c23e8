use crate::cache::{Cache, CacheStats};
use crate::error::{Error, Result};
use linked_hash_map::LinkedHashMap;
use log::{debug, trace};
use std::hash::Hash;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Upper bound on the entries reserved up front; larger caches grow on demand.
const MAX_PREALLOCATED: u64 = 1024;

/// The inner data structure for the LRUCache.
///
/// The link order of `key_value_map` is the recency order: the front is the least recently used
/// entry and the next one to be evicted.
struct LRUCacheInner<K: Eq + Hash, V> {
    capacity: u64,
    key_value_map: LinkedHashMap<K, Arc<V>>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<K: Eq + Hash, V> LRUCacheInner<K, V> {
    fn new(capacity: u64) -> Self {
        LRUCacheInner {
            capacity,
            key_value_map: LinkedHashMap::with_capacity(capacity.min(MAX_PREALLOCATED) as usize),
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }
}

/// LRUCache is a cache that uses the Least Recently Used (LRU) algorithm to evict items.
///
/// Every hit and every write moves the key to the most recently used position. When a new key
/// arrives while the cache is full, the least recently used entry is removed to make space for it.
///
/// All mutability is handled internally with a Mutex, so each operation is atomic and the cache can
/// be shared between threads. Values are returned as Arcs to allow for shared ownership.
///
/// Example:
/// ```
/// use memocache::{Cache, LRUCache};
///
/// let cache = LRUCache::<&str, String>::new(2).unwrap();
///
/// cache.set("a", "1".to_string());
/// cache.set("b", "2".to_string());
/// cache.get(&"a");
/// cache.set("c", "3".to_string());
///
/// assert!(cache.contains(&"a"));
/// assert!(!cache.contains(&"b"));
/// println!("{:?}", cache.stats());
/// ```
pub struct LRUCache<K: Eq + Hash + Clone + Sync + Send, V: Send + Sync> {
    inner: Mutex<LRUCacheInner<K, V>>,
}

impl<K: Eq + Hash + Clone + Sync + Send, V: Send + Sync> LRUCache<K, V> {
    /// Create a new LRUCache holding at most `capacity` entries.
    ///
    /// A capacity of zero could never retain anything and is rejected with
    /// [`Error::InvalidConfiguration`].
    pub fn new(capacity: u64) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidConfiguration { capacity });
        }
        debug!("new LRU cache (capacity = {})", capacity);
        Ok(LRUCache {
            inner: Mutex::new(LRUCacheInner::new(capacity)),
        })
    }

    /// Maximum number of entries the cache holds.
    pub fn capacity(&self) -> u64 {
        self.lock().capacity
    }

    /// Keys currently held, from least to most recently used.
    pub fn keys(&self) -> Vec<K> {
        self.lock().key_value_map.keys().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, LRUCacheInner<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: Eq + Hash + Clone + Sync + Send, V: Send + Sync> Cache<K, V> for LRUCache<K, V> {
    /// Get a value from the cache, marking it as most recently used.
    fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut inner = self.lock();
        let result = inner.key_value_map.get_refresh(key).cloned();

        if result.is_some() {
            inner.hits += 1;
        } else {
            inner.misses += 1;
        }
        result
    }

    /// Set a value in the cache. A new key evicts the least recently used entry if the cache is full.
    fn set_shared(&self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        let mut inner = self.lock();
        if let Some(slot) = inner.key_value_map.get_refresh(&key) {
            return Some(mem::replace(slot, value));
        }

        if inner.key_value_map.len() as u64 >= inner.capacity
            && inner.key_value_map.pop_front().is_some()
        {
            inner.evictions += 1;
            trace!(
                "evicted least recently used entry (capacity = {}, evictions = {})",
                inner.capacity,
                inner.evictions
            );
        }
        inner.key_value_map.insert(key, value)
    }

    fn contains(&self, key: &K) -> bool {
        self.lock().key_value_map.contains_key(key)
    }

    /// Remove a value from the cache.
    fn remove(&self, key: &K) -> Option<Arc<V>> {
        self.lock().key_value_map.remove(key)
    }

    /// Clear the cache, removing all items and resetting the recency order.
    fn clear(&self) {
        let mut inner = self.lock();
        debug!("clearing LRU cache ({} entries)", inner.key_value_map.len());
        inner.key_value_map.clear();
    }

    /// Get the cache statistics.
    fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            evictions: inner.evictions,
            size: inner.key_value_map.len() as u64,
            capacity: Some(inner.capacity),
        }
    }
}
