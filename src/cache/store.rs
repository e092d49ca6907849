//! Cache Store Module
//!
//! Main cache engine combining a key index with recency tracking and a byte budget.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, warn};

use crate::cache::{entry_size, ByteSize, CacheEntry, CacheStats, Handle, RecencyList};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

/// Callback invoked with the key and value of every evicted entry.
pub type EvictionCallback<V> = Box<dyn FnMut(String, V) + Send>;

// == LRU Cache ==
/// Byte-budgeted least-recently-used cache.
///
/// Every entry is charged `key.len() + value.byte_size()` bytes. Once the
/// total exceeds `max_bytes`, the least recently used entries are evicted
/// until the cache fits again. A budget of 0 disables eviction.
///
/// Both [`get`](Self::get) and [`add`](Self::add) count as a use.
///
/// # Concurrency
/// The cache does no locking of its own and every operation takes
/// `&mut self`. Callers sharing one instance across threads or tasks must
/// serialize access themselves, for example with a `Mutex<LruCache<V>>`,
/// or split the key space over several independently locked caches.
///
/// # Example
/// ```
/// use byte_lru::LruCache;
///
/// let mut cache = LruCache::new(10);
/// cache.add("k1", "v1".to_string());
/// cache.add("k2", "v2".to_string());
/// cache.add("k3", "v3".to_string()); // 12 bytes > 10, evicts k1
///
/// assert!(cache.get("k1").is_none());
/// assert_eq!(cache.get("k3").map(String::as_str), Some("v3"));
/// ```
pub struct LruCache<V> {
    /// Key to position in the recency list
    index: HashMap<String, Handle>,
    /// Entries ordered from most to least recently used
    order: RecencyList<CacheEntry<V>>,
    /// Bytes charged by live entries
    used_bytes: usize,
    /// Budget in bytes, 0 = unbounded
    max_bytes: usize,
    /// Optional eviction hook
    on_evicted: Option<EvictionCallback<V>>,
    /// Performance statistics
    stats: CacheStats,
}

impl<V: ByteSize> LruCache<V> {
    // == Constructors ==
    /// Creates an empty cache with the given byte budget.
    pub fn new(max_bytes: usize) -> Self {
        Self {
            index: HashMap::new(),
            order: RecencyList::new(),
            used_bytes: 0,
            max_bytes,
            on_evicted: None,
            stats: CacheStats::new(),
        }
    }

    /// Creates an empty cache that reports every eviction to `on_evicted`.
    ///
    /// The callback runs synchronously inside [`add`](Self::add) or
    /// [`remove_oldest`](Self::remove_oldest), after the entry has been
    /// fully removed. It receives ownership of the evicted key and value,
    /// so it can release any resource tied to them. It cannot reach back
    /// into the cache while it runs.
    pub fn with_on_evicted<F>(max_bytes: usize, on_evicted: F) -> Self
    where
        F: FnMut(String, V) + Send + 'static,
    {
        let mut cache = Self::new(max_bytes);
        cache.on_evicted = Some(Box::new(on_evicted));
        cache
    }

    /// Creates an empty cache from loaded configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        info!(
            "LRU cache initialized: max_bytes={}{}",
            config.max_bytes,
            if config.is_unbounded() { " (unbounded)" } else { "" }
        );
        Self::new(config.max_bytes)
    }

    // == Get ==
    /// Retrieves a value by key and marks it as most recently used.
    ///
    /// Returns None if the key is not cached.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        match self.index.get(key).copied() {
            Some(handle) => {
                self.order.move_to_front(handle);
                self.stats.record_hit();
                self.order.get(handle).map(|entry| &entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Retrieves a value without affecting recency or statistics.
    pub fn peek(&self, key: &str) -> Option<&V> {
        let handle = self.index.get(key)?;
        self.order.get(*handle).map(|entry| &entry.value)
    }

    // == Contains ==
    /// Checks whether a key is cached without affecting recency.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Add ==
    /// Stores a value under `key` and marks it as most recently used.
    ///
    /// An existing value for the key is replaced and the size difference is
    /// applied to the budget. Afterwards the least recently used entries are
    /// evicted until the cache fits within `max_bytes`.
    ///
    /// The entry being written is never evicted by its own insert. If it is
    /// larger than the whole budget, every other entry is evicted and the
    /// cache stays over budget holding only that entry. Use
    /// [`try_add`](Self::try_add) to refuse such entries instead.
    pub fn add(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();

        match self.index.get(&key).copied() {
            Some(handle) => {
                self.order.move_to_front(handle);
                if let Some(entry) = self.order.get_mut(handle) {
                    let new_size = value.byte_size();
                    let old_value = entry.replace_value(value);
                    self.used_bytes = self.used_bytes - old_value.byte_size() + new_size;
                }
            }
            None => {
                let size = entry_size(&key, &value);
                let handle = self.order.push_front(CacheEntry::new(key.clone(), value));
                self.index.insert(key, handle);
                self.used_bytes += size;
            }
        }

        self.evict_to_budget();
        self.refresh_occupancy();
    }

    // == Try Add ==
    /// Stores a value like [`add`](Self::add), but refuses entries that
    /// cannot fit even in an empty cache.
    ///
    /// # Errors
    /// Returns `CacheError::EntryTooLarge` when the budget is bounded and
    /// `key.len() + value.byte_size()` exceeds it. The cache is left
    /// untouched in that case.
    pub fn try_add(&mut self, key: impl Into<String>, value: V) -> Result<()> {
        let key = key.into();
        let size = entry_size(&key, &value);

        if self.max_bytes != 0 && size > self.max_bytes {
            return Err(CacheError::EntryTooLarge {
                key,
                size,
                max_bytes: self.max_bytes,
            });
        }

        self.add(key, value);
        Ok(())
    }

    // == Remove Oldest ==
    /// Evicts the least recently used entry.
    ///
    /// Does nothing if the cache is empty.
    pub fn remove_oldest(&mut self) {
        if let Some(entry) = self.order.pop_back() {
            self.index.remove(&entry.key);
            let size = entry.size();
            self.used_bytes -= size;
            self.stats.record_eviction();
            self.refresh_occupancy();
            debug!("Evicted key '{}' ({} bytes)", entry.key, size);

            if let Some(on_evicted) = self.on_evicted.as_mut() {
                let (key, value) = entry.into_parts();
                on_evicted(key, value);
            }
        }
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Byte Accounting ==
    /// Returns the bytes currently charged against the budget.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    /// Returns the configured budget, 0 = unbounded.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    // == Keys ==
    /// Iterates keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(|entry| entry.key.as_str())
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_occupancy(self.len(), self.used_bytes);
        stats.max_bytes = self.max_bytes;
        stats
    }

    // Evicts from the back while over budget, sparing the front entry.
    fn evict_to_budget(&mut self) {
        while self.max_bytes != 0 && self.used_bytes > self.max_bytes && self.order.len() > 1 {
            self.remove_oldest();
        }

        if self.max_bytes != 0 && self.used_bytes > self.max_bytes {
            if let Some(entry) = self.order.front() {
                warn!(
                    "Entry '{}' ({} bytes) exceeds the cache budget of {} bytes",
                    entry.key,
                    entry.size(),
                    self.max_bytes
                );
            }
        }
    }

    fn refresh_occupancy(&mut self) {
        self.stats.set_occupancy(self.order.len(), self.used_bytes);
    }

    /// Panics if index, order and byte accounting disagree.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.index.len(), self.order.len(), "index/order size mismatch");

        let mut recomputed = 0;
        for entry in self.order.iter() {
            let handle = self
                .index
                .get(&entry.key)
                .unwrap_or_else(|| panic!("key '{}' missing from index", entry.key));
            assert_eq!(
                self.order.get(*handle).map(|e| e.key.as_str()),
                Some(entry.key.as_str()),
                "index points at the wrong entry"
            );
            recomputed += entry.size();
        }
        assert_eq!(recomputed, self.used_bytes, "used_bytes drifted");
    }
}

impl<V> fmt::Debug for LruCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.index.len())
            .field("used_bytes", &self.used_bytes)
            .field("max_bytes", &self.max_bytes)
            .field("on_evicted", &self.on_evicted.is_some())
            .finish()
    }
}
