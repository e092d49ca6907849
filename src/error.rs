//! Error types for the cache
//!
//! The core cache operations are infallible; these errors cover
//! configuration loading and the strict insert path.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Configuration value could not be accepted
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Entry alone is larger than the whole byte budget
    #[error("Entry '{key}' needs {size} bytes but the cache budget is {max_bytes} bytes")]
    EntryTooLarge {
        key: String,
        size: usize,
        max_bytes: usize,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
