//! Recursive Fibonacci, uncached and memoized.
//!
//! Inputs are `i64` so that negative arguments can be reported as [`Error::InvalidArgument`]
//! rather than wrapping. Results are `u64`; the largest representable one is `fib(93)`, and any
//! larger input fails with [`Error::Overflow`] for `fib(94)`, the first value that does not fit.
//! Every variant returns the same value or the same error for the same input.

use std::sync::Arc;

use crate::cache::lru::LRUCache;
use crate::cache::unbounded::UnboundedCache;
use crate::cache::{Cache, CacheStats};
use crate::error::{Error, Result};
use crate::memo::Memoized;

/// Largest `n` for which `fib(n)` fits in a `u64`.
pub const MAX_N: u64 = 93;

type Step = fn(&dyn Fn(u64) -> Result<Arc<u64>>, u64) -> Result<u64>;

fn validate(n: i64) -> Result<u64> {
    u64::try_from(n).map_err(|_| Error::InvalidArgument(n))
}

/// Naive recursive Fibonacci without any caching.
///
/// Runs in exponential time; this is the baseline the cached variants are measured against.
pub fn fib(n: i64) -> Result<u64> {
    let n = validate(n)?;
    if n > MAX_N {
        // The recursion would reach fib(MAX_N + 1) first and fail there, after exponential work.
        return Err(Error::Overflow(MAX_N + 1));
    }
    naive(n)
}

fn naive(n: u64) -> Result<u64> {
    if n <= 1 {
        return Ok(n);
    }
    naive(n - 1)?
        .checked_add(naive(n - 2)?)
        .ok_or(Error::Overflow(n))
}

fn step(fib: &dyn Fn(u64) -> Result<Arc<u64>>, n: u64) -> Result<u64> {
    if n <= 1 {
        return Ok(n);
    }
    let a = *fib(n - 1)?;
    let b = *fib(n - 2)?;
    a.checked_add(b).ok_or(Error::Overflow(n))
}

/// Fibonacci memoized through a cache.
///
/// Every recursive sub-call is looked up in the same cache as the outer call, so with a cache that
/// can hold the working set the number of evaluated sub-problems is linear in `n`.
///
/// Example:
/// ```
/// use memocache::Fibonacci;
///
/// let fib = Fibonacci::lru(5).unwrap();
/// assert_eq!(fib.compute(10).unwrap(), 55);
/// assert_eq!(fib.stats().misses, 11);
///
/// fib.clear();
/// assert_eq!(fib.stats().size, 0);
/// ```
pub struct Fibonacci<C> {
    memo: Memoized<u64, u64, C, Step>,
}

impl<C: Cache<u64, u64>> Fibonacci<C> {
    pub fn new(cache: C) -> Self {
        Fibonacci {
            memo: Memoized::new(cache, step as Step),
        }
    }

    pub fn compute(&self, n: i64) -> Result<u64> {
        let n = validate(n)?;
        if n > MAX_N + 1 {
            // Same error the recursion would hit at fib(MAX_N + 1), without recursing n levels deep.
            return Err(Error::Overflow(MAX_N + 1));
        }
        self.memo.call(n).map(|value| *value)
    }

    pub fn clear(&self) {
        self.memo.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.memo.stats()
    }

    pub fn cache(&self) -> &C {
        self.memo.cache()
    }
}

impl Fibonacci<UnboundedCache<u64, u64>> {
    /// Memoize through a cache that keeps every sub-result.
    pub fn unbounded() -> Self {
        Self::new(UnboundedCache::new())
    }
}

impl Fibonacci<LRUCache<u64, u64>> {
    /// Memoize through an LRU cache of the given capacity.
    ///
    /// The capacity is used as given. Below 3 the cache can no longer hold both sub-results a
    /// step needs, and the call count grows exponentially again.
    pub fn lru(capacity: u64) -> Result<Self> {
        Ok(Self::new(LRUCache::new(capacity)?))
    }
}
