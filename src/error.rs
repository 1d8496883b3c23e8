use thiserror::Error;

/// Errors raised by the caches, the Fibonacci functions and the benchmark harness.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bounded cache was configured with a capacity that can hold nothing.
    #[error("invalid cache configuration: capacity must be at least 1, got {capacity}")]
    InvalidConfiguration { capacity: u64 },

    /// Fibonacci is only defined for non-negative inputs.
    #[error("invalid argument: fib({0}) is undefined for negative n")]
    InvalidArgument(i64),

    /// The result does not fit in a `u64`.
    #[error("overflow: fib({0}) does not fit in a u64")]
    Overflow(u64),

    /// Two variants of the same computation disagreed.
    #[error("result mismatch for n = {n}: uncached = {uncached}, unbounded = {unbounded}, lru = {lru}")]
    ResultMismatch {
        n: i64,
        uncached: u64,
        unbounded: u64,
        lru: u64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
