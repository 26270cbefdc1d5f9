//! Result cache
//!
//! A bounded least-recently-used map with a per-entry time-to-live, keyed by
//! the fetch operation and its input. Callers store successful results only.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use cache::{CacheKey, Operation, ResultCache};
//!
//! let mut cache = ResultCache::new(16, Duration::from_secs(60));
//! let key = CacheKey::new(Operation::Gdp, "");
//! cache.put(key.clone(), 2.8);
//! assert_eq!(cache.get(&key), Some(2.8));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 64;
pub const DEFAULT_TTL: Duration = Duration::from_secs(15 * 60);

/// Remote fetch whose result may be memoized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    StockPrices,
    Sentiment,
    Inflation,
    Gdp,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::StockPrices => "stock_prices",
            Operation::Sentiment => "sentiment",
            Operation::Inflation => "inflation",
            Operation::Gdp => "gdp",
        };
        f.write_str(name)
    }
}

/// Cache key: an operation plus its normalized input (empty when the
/// operation takes none).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub operation: Operation,
    pub input: String,
}

impl CacheKey {
    pub fn new(operation: Operation, input: impl Into<String>) -> Self {
        Self {
            operation,
            input: input.into(),
        }
    }
}

struct Entry<V> {
    value: V,
    inserted: Instant,
    last_access: u64,
}

/// Bounded LRU cache with expiry.
pub struct ResultCache<V: Clone> {
    capacity: usize,
    ttl: Duration,
    map: HashMap<CacheKey, Entry<V>>,
    access_count: u64,
}

impl<V: Clone> ResultCache<V> {
    /// A capacity of 0 disables caching.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            map: HashMap::new(),
            access_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&mut self, key: &CacheKey) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    fn get_at(&mut self, key: &CacheKey, now: Instant) -> Option<V> {
        let expired = match self.map.get(key) {
            Some(entry) => now.saturating_duration_since(entry.inserted) >= self.ttl,
            None => {
                debug!(operation = %key.operation, input = %key.input, "Cache miss");
                return None;
            }
        };

        if expired {
            debug!(operation = %key.operation, input = %key.input, "Cache entry expired");
            self.map.remove(key);
            return None;
        }

        self.access_count += 1;
        let entry = self.map.get_mut(key)?;
        entry.last_access = self.access_count;
        debug!(operation = %key.operation, input = %key.input, "Cache hit");
        Some(entry.value.clone())
    }

    pub fn put(&mut self, key: CacheKey, value: V) {
        self.put_at(key, value, Instant::now());
    }

    fn put_at(&mut self, key: CacheKey, value: V, now: Instant) {
        if self.capacity == 0 {
            return;
        }

        self.access_count += 1;

        if self.map.len() >= self.capacity && !self.map.contains_key(&key) {
            // Evict least recently used
            if let Some(lru_key) = self
                .map
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(k, _)| k.clone())
            {
                debug!(operation = %lru_key.operation, input = %lru_key.input, "Cache eviction");
                self.map.remove(&lru_key);
            }
        }

        self.map.insert(
            key,
            Entry {
                value,
                inserted: now,
                last_access: self.access_count,
            },
        );
    }

    /// Remove one entry. Returns whether it was present.
    pub fn invalidate(&mut self, key: &CacheKey) -> bool {
        self.map.remove(key).is_some()
    }

    /// Remove every entry for `operation`. Returns how many were dropped.
    pub fn invalidate_operation(&mut self, operation: Operation) -> usize {
        let before = self.map.len();
        self.map.retain(|key, _| key.operation != operation);
        before - self.map.len()
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.access_count = 0;
    }

    /// Entries held, including any that have expired but not been read.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<V: Clone> Default for ResultCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}

impl<V: Clone> fmt::Debug for ResultCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultCache")
            .field("capacity", &self.capacity)
            .field("ttl", &self.ttl)
            .field("len", &self.map.len())
            .finish()
    }
}
