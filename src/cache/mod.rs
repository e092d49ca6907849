//! Cache Module
//!
//! Provides an in-memory key-value cache with byte-budgeted LRU eviction.

mod entry;
mod lru;
mod size;
mod stats;
mod store;


// Re-export public types
pub use entry::{entry_size, CacheEntry};
pub use lru::{Handle, RecencyList};
pub use size::ByteSize;
pub use stats::CacheStats;
pub use store::{EvictionCallback, LruCache};
