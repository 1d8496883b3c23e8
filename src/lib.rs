pub mod cache;
pub mod error;
pub mod fib;
pub mod harness;
pub mod memo;
pub use crate::cache::lru::LRUCache;
pub use crate::cache::unbounded::UnboundedCache;
pub use crate::cache::{Cache, CacheStats};
pub use crate::error::{Error, Result};
pub use crate::fib::Fibonacci;
pub use crate::memo::Memoized;
