//! Timing harness comparing uncached, unbounded-cached and LRU-cached Fibonacci.
//!
//! Each cached variant gets one cache for the whole run, and that cache is cleared after every
//! trial so that each trial starts from empty.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::cache::Cache;
use crate::error::{Error, Result};
use crate::fib::{fib, Fibonacci};

/// Parameters of a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Fibonacci input to time.
    pub n: i64,
    /// Number of timed runs averaged per variant.
    pub trials: u32,
    /// Capacity of the LRU variant. Deliberately small; it is not sized to the recursion depth.
    pub lru_capacity: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            n: 35,
            trials: 10,
            lru_capacity: 5,
        }
    }
}

/// Mean durations of the three variants on the same input.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub n: i64,
    pub result: u64,
    pub lru_capacity: u64,
    pub uncached: Duration,
    pub unbounded: Duration,
    pub lru: Duration,
}

impl Comparison {
    pub fn speedup_unbounded(&self) -> f64 {
        speedup(self.uncached, self.unbounded)
    }

    pub fn speedup_lru(&self) -> f64 {
        speedup(self.uncached, self.lru)
    }
}

fn speedup(baseline: Duration, candidate: Duration) -> f64 {
    baseline.as_secs_f64() / candidate.as_secs_f64().max(f64::MIN_POSITIVE)
}

/// Per-input mean durations, uncached against unbounded-cached.
#[derive(Debug, Clone, Default)]
pub struct Series {
    pub inputs: Vec<i64>,
    pub uncached: Vec<Duration>,
    pub cached: Vec<Duration>,
}

/// Run `f` `trials` times (at least once) and return the mean duration with the last result.
///
/// The first error stops the measurement and is returned.
pub fn time_average<T>(trials: u32, mut f: impl FnMut() -> Result<T>) -> Result<(Duration, T)> {
    let trials = trials.max(1);
    let start = Instant::now();
    let mut result = f()?;
    for _ in 1..trials {
        result = f()?;
    }
    Ok((start.elapsed() / trials, result))
}

fn compute_and_clear<C: Cache<u64, u64>>(fib: &Fibonacci<C>, n: i64) -> Result<u64> {
    let result = fib.compute(n);
    fib.clear();
    result
}

fn agree(n: i64, uncached: u64, unbounded: u64, lru: u64) -> Result<u64> {
    if uncached == unbounded && unbounded == lru {
        Ok(uncached)
    } else {
        Err(Error::ResultMismatch {
            n,
            uncached,
            unbounded,
            lru,
        })
    }
}

/// Time all three variants on `config.n` and check that they agree.
pub fn compare(config: &HarnessConfig) -> Result<Comparison> {
    let n = config.n;
    let lru_fib = Fibonacci::lru(config.lru_capacity)?;
    let unbounded_fib = Fibonacci::unbounded();

    let (uncached, uncached_result) = time_average(config.trials, || fib(n))?;
    debug!("uncached fib({}) took {:?} on average", n, uncached);

    let (unbounded, unbounded_result) =
        time_average(config.trials, || compute_and_clear(&unbounded_fib, n))?;
    debug!("unbounded fib({}) took {:?} on average", n, unbounded);

    let (lru, lru_result) = time_average(config.trials, || compute_and_clear(&lru_fib, n))?;
    debug!(
        "lru fib({}) took {:?} on average (capacity = {})",
        n, lru, config.lru_capacity
    );

    let result = agree(n, uncached_result, unbounded_result, lru_result)?;
    info!("fib({}) = {} for every variant", n, result);

    Ok(Comparison {
        n,
        result,
        lru_capacity: config.lru_capacity,
        uncached,
        unbounded,
        lru,
    })
}

/// Time the uncached and unbounded-cached variants on every input.
///
/// One fresh cache serves the whole sweep and is never cleared, so later inputs and repeated
/// trials reuse earlier results.
pub fn measure_series(trials: u32, inputs: &[i64]) -> Result<Series> {
    let mut series = Series {
        inputs: inputs.to_vec(),
        ..Series::default()
    };

    for &n in inputs {
        let (elapsed, _) = time_average(trials, || fib(n))?;
        series.uncached.push(elapsed);
    }

    let cached_fib = Fibonacci::unbounded();
    for &n in inputs {
        let (elapsed, _) = time_average(trials, || cached_fib.compute(n))?;
        series.cached.push(elapsed);
    }
    debug!("series cache after sweep: {:?}", cached_fib.stats());

    Ok(series)
}
