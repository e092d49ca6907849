//! byte_lru - A byte-budgeted LRU cache
//!
//! Stores values of any type that can report its size under string keys,
//! and evicts the least recently used entries once the configured byte
//! budget is exceeded. Meant to be embedded as the local memory layer of a
//! larger cache service.
//!
//! The cache is single-threaded: wrap it in a lock, or shard it over
//! several locked instances, before sharing it.
//!
//! ```
//! use byte_lru::{CacheConfig, LruCache};
//!
//! let mut cache: LruCache<Vec<u8>> = LruCache::from_config(&CacheConfig::new(1024));
//! cache.add("blob", vec![0u8; 100]);
//! assert_eq!(cache.used_bytes(), 4 + 100);
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{ByteSize, CacheStats, EvictionCallback, LruCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
