//! Cache Entry Module
//!
//! Defines the key/value pair stored in the recency list.

use crate::cache::ByteSize;

// == Cache Entry ==
/// A single cached key/value pair.
///
/// The key is kept next to the value so that evicting the oldest entry can
/// also drop its index mapping without a reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<V> {
    /// The key the entry is stored under
    pub key: String,
    /// The stored value
    pub value: V,
}

impl<V: ByteSize> CacheEntry<V> {
    // == Constructor ==
    pub fn new(key: String, value: V) -> Self {
        Self { key, value }
    }

    // == Size ==
    /// Returns the bytes this entry is charged against the cache budget.
    ///
    /// The charge is `key.len() + value.byte_size()`.
    pub fn size(&self) -> usize {
        entry_size(&self.key, &self.value)
    }

    // == Replace Value ==
    /// Swaps in a new value and returns the previous one.
    pub fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    // == Into Parts ==
    pub fn into_parts(self) -> (String, V) {
        (self.key, self.value)
    }
}

// == Utility Functions ==
/// Returns the budget charge for a key/value pair that is not stored yet.
pub fn entry_size<V: ByteSize + ?Sized>(key: &str, value: &V) -> usize {
    key.len().saturating_add(value.byte_size())
}
