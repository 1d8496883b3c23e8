use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::cache::{Cache, CacheStats};

/// A recursive function bound to the cache that memoizes it.
///
/// The step function receives a recursion handle as its first argument. Calling the handle goes
/// back through [`Memoized::call`], so every sub-call is looked up in, and stored into, the same
/// cache instance as the outer call.
///
/// Example:
/// ```
/// use memocache::{Memoized, UnboundedCache};
/// use std::convert::Infallible;
/// use std::sync::Arc;
///
/// // Number of lattice paths from (0, 0) to (n, n) moving right or up, via the row recurrence.
/// fn step(paths: &dyn Fn((u64, u64)) -> Result<Arc<u64>, Infallible>, (x, y): (u64, u64)) -> Result<u64, Infallible> {
///     if x == 0 || y == 0 {
///         return Ok(1);
///     }
///     Ok(*paths((x - 1, y))? + *paths((x, y - 1))?)
/// }
///
/// let paths = Memoized::new(UnboundedCache::new(), step);
/// assert_eq!(*paths.call((16, 16)).unwrap(), 601_080_390);
/// assert_eq!(paths.stats().misses, 17 * 17 - 1);
/// ```
pub struct Memoized<K, V, C, F> {
    cache: C,
    func: F,
    _marker: PhantomData<fn(K) -> V>,
}

impl<K, V, C, F> Memoized<K, V, C, F>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
    C: Cache<K, V>,
{
    pub fn new(cache: C, func: F) -> Self {
        Memoized {
            cache,
            func,
            _marker: PhantomData,
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Evaluate `key`, consulting the cache first.
    ///
    /// Errors from the step function are returned as-is and never cached.
    pub fn call<E>(&self, key: K) -> Result<Arc<V>, E>
    where
        F: Fn(&dyn Fn(K) -> Result<Arc<V>, E>, K) -> Result<V, E>,
    {
        let recurse: &dyn Fn(K) -> Result<Arc<V>, E> = &|k: K| self.call(k);
        self.cache
            .get_or_compute(key, |k| (self.func)(recurse, k.clone()))
    }

    /// Drop every memoized result, so the next call starts from an empty cache.
    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
