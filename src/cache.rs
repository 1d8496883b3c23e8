use std::hash::Hash;
use std::sync::Arc;

/// CacheStats contains cache statistics
///
/// `capacity` is `None` for caches that never evict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub size: u64,
    pub capacity: Option<u64>,
}

/// Cache trait defines the methods that a cache should implement and provides a shared interface for different cache implementations
///
/// The cache trait is useful for defining generic memoized functions that can work with any cache implementation
/// Example:
/// ```
/// use memocache::{Cache, LRUCache, UnboundedCache};
///
/// fn square_all<C>(cache: &C) -> u64
/// where
///     C: Cache<u64, u64>,
/// {
///     let mut total = 0;
///     for n in [3, 4, 3] {
///         let value = cache
///             .get_or_compute(n, |&n| Ok::<_, std::convert::Infallible>(n * n))
///             .unwrap();
///         total += *value;
///     }
///     total
/// }
///
/// fn main() {
///     let unbounded = UnboundedCache::<u64, u64>::new();
///     assert_eq!(square_all(&unbounded), 34);
///
///     let lru = LRUCache::<u64, u64>::new(1).unwrap();
///     assert_eq!(square_all(&lru), 34);
///     assert_eq!(lru.stats().evictions, 2);
/// }
/// ```
pub trait Cache<K: Eq + Hash + Clone + Send + Sync, V: Send + Sync>: Send + Sync {
    /// Look up a value, counting a hit or a miss.
    fn get(&self, key: &K) -> Option<Arc<V>>;

    /// Store an already shared value, returning the value it replaced.
    fn set_shared(&self, key: K, value: Arc<V>) -> Option<Arc<V>>;

    /// Whether `key` is held. Touches neither the statistics nor the recency order.
    fn contains(&self, key: &K) -> bool;

    fn remove(&self, key: &K) -> Option<Arc<V>>;
    fn clear(&self);
    fn stats(&self) -> CacheStats;

    /// Store a value, returning the value it replaced.
    fn set(&self, key: K, value: V) -> Option<Arc<V>> {
        self.set_shared(key, Arc::new(value))
    }

    /// Return the cached value for `key`, or compute, store and return it.
    ///
    /// No lock is held while `compute` runs, so `compute` may call back into this cache. That is
    /// what lets a recursive function route its own sub-calls through the same instance.
    ///
    /// If `compute` fails the error is returned unchanged and the cache is left as it was after the
    /// lookup: nothing is stored and nothing is evicted.
    fn get_or_compute<E, F>(&self, key: K, compute: F) -> Result<Arc<V>, E>
    where
        Self: Sized,
        F: FnOnce(&K) -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }
        let value = Arc::new(compute(&key)?);
        self.set_shared(key, Arc::clone(&value));
        Ok(value)
    }
}

pub mod lru;
pub mod unbounded;
