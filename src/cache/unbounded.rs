use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::cache::{Cache, CacheStats};

/// UnboundedCacheInner contains the inner data structure for the UnboundedCache.
struct UnboundedCacheInner<K: Eq + Hash + Send, V: Send + Sync> {
    key_value_map: HashMap<K, Arc<V>>,
    hits: u64,
    misses: u64,
}

/// UnboundedCache keeps every value it is given and never evicts.
///
/// Entries only leave the cache through `remove` or `clear`.
///
/// All mutability is handled internally with a Mutex, so the cache can be shared between threads. Values are returned as Arcs to allow for shared ownership.
///
/// Example:
/// ```
/// use memocache::{Cache, UnboundedCache};
///
/// let cache = UnboundedCache::<&str, String>::new();
///
/// let original_value = cache.set("key", "value".to_string());
///
/// assert!(original_value.is_none());
///
/// let value = cache.get(&"key");
///
/// assert!(value.is_some());
/// assert_eq!(*value.unwrap(), "value".to_string());
/// println!("{:?}", cache.stats());
/// ```
pub struct UnboundedCache<K: Eq + Hash + Send, V: Send + Sync> {
    inner: Mutex<UnboundedCacheInner<K, V>>,
}

impl<K: Eq + Hash + Sync + Send, V: Send + Sync> UnboundedCache<K, V> {
    /// Create a new, empty UnboundedCache.
    pub fn new() -> Self {
        debug!("new unbounded cache");
        UnboundedCache {
            inner: Mutex::new(UnboundedCacheInner {
                key_value_map: HashMap::new(),
                hits: 0,
                misses: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, UnboundedCacheInner<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: Eq + Hash + Sync + Send, V: Send + Sync> Default for UnboundedCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone + Sync + Send, V: Send + Sync> Cache<K, V> for UnboundedCache<K, V> {
    fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut inner = self.lock();
        let result = inner.key_value_map.get(key).cloned();
        if result.is_some() {
            inner.hits += 1;
        } else {
            inner.misses += 1;
        }
        result
    }

    fn set_shared(&self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        self.lock().key_value_map.insert(key, value)
    }

    fn contains(&self, key: &K) -> bool {
        self.lock().key_value_map.contains_key(key)
    }

    fn remove(&self, key: &K) -> Option<Arc<V>> {
        self.lock().key_value_map.remove(key)
    }

    fn clear(&self) {
        let mut inner = self.lock();
        debug!("clearing unbounded cache ({} entries)", inner.key_value_map.len());
        inner.key_value_map.clear();
    }

    fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            evictions: 0,
            size: inner.key_value_map.len() as u64,
            capacity: None,
        }
    }
}
