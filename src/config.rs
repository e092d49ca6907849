//! Configuration Module
//!
//! Handles loading and validating the cache budget from environment variables.

use std::env;

use crate::error::{CacheError, Result};

/// Environment variable holding the byte budget.
pub const MAX_BYTES_ENV: &str = "LRU_MAX_BYTES";

/// Budget used when nothing is configured (64 MiB).
pub const DEFAULT_MAX_BYTES: usize = 64 * 1024 * 1024;

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum bytes the cache may hold, 0 = unbounded
    pub max_bytes: usize,
}

impl CacheConfig {
    /// Creates a config with an explicit budget.
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LRU_MAX_BYTES` - Byte budget, 0 disables eviction (default: 64 MiB)
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfig` when the variable is set but is
    /// negative, not a number, or does not fit the platform word size.
    /// Negative budgets are rejected rather than clamped.
    pub fn from_env() -> Result<Self> {
        match env::var(MAX_BYTES_ENV) {
            Ok(raw) => Ok(Self {
                max_bytes: parse_max_bytes(&raw)?,
            }),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(CacheError::InvalidConfig(format!(
                "{} is not valid unicode",
                MAX_BYTES_ENV
            ))),
        }
    }

    /// Returns true when the budget never triggers eviction.
    pub fn is_unbounded(&self) -> bool {
        self.max_bytes == 0
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

/// Parses a byte budget, rejecting negative and malformed values.
pub fn parse_max_bytes(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    let parsed: i128 = trimmed.parse().map_err(|_| {
        CacheError::InvalidConfig(format!(
            "{} must be a whole number of bytes, got '{}'",
            MAX_BYTES_ENV, trimmed
        ))
    })?;

    if parsed < 0 {
        return Err(CacheError::InvalidConfig(format!(
            "{} must not be negative, got {}",
            MAX_BYTES_ENV, parsed
        )));
    }

    usize::try_from(parsed).map_err(|_| {
        CacheError::InvalidConfig(format!(
            "{} is too large for this platform: {}",
            MAX_BYTES_ENV, parsed
        ))
    })
}
