//! Cache Handle Module
//!
//! A named cache instance: TTL policy layered over a backing store.
//!
//! The cache owns its store exclusively and is the only component that
//! mutates it. Expiration is lazy: an expired entry is detected and removed
//! by the read that finds it, never by a background sweep.

use std::time::Duration;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::stats::StatsCounters;
use crate::cache::{CacheEntry, CacheStats, MemoryStore, StoreBackend};
use crate::error::Result;

// == Cache ==
/// A named key/value cache with a default TTL.
///
/// Operations are asynchronous so the backing store can be swapped for one
/// that suspends (e.g. a network-backed store) without changing call sites.
/// With the default [`MemoryStore`] every operation completes immediately.
///
/// Writes are unconditional: concurrent `set` calls on the same key race and
/// the last one to complete wins. The read-then-delete sequence of a lazy
/// expiration runs under a single write guard, so it cannot interleave with
/// a concurrent `set` or `remove` on the same key.
#[derive(Debug)]
pub struct Cache<B: StoreBackend = MemoryStore> {
    /// Name this cache was registered under
    name: String,
    /// Default TTL for entries without an override, zero = never expires
    default_ttl: Duration,
    /// Backing store, serialized behind a write lock
    store: RwLock<B>,
    /// Hit/miss/expiration counters
    stats: StatsCounters,
}

impl<B: StoreBackend> Cache<B> {
    // == Constructor ==
    /// Creates a cache over the given backing store.
    ///
    /// # Arguments
    /// * `name` - Identifier for this cache, used in logs
    /// * `default_ttl` - TTL applied to entries without an override (zero
    ///   disables expiration)
    /// * `store` - The backing store this cache owns
    pub fn new(name: impl Into<String>, default_ttl: Duration, store: B) -> Self {
        Self {
            name: name.into(),
            default_ttl,
            store: RwLock::new(store),
            stats: StatsCounters::default(),
        }
    }

    /// Returns the name this cache was created under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default TTL entries fall back to at read time.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Get ==
    /// Retrieves the payload for `key`, or `None` if absent or expired.
    ///
    /// The effective TTL is resolved at read time: the entry's override when
    /// present, otherwise this cache's default. An expired entry is deleted
    /// from the store as a side effect of the read that detects it.
    pub async fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut store = self.store.write().await;

        let Some(entry) = store.read(key).await? else {
            self.stats.record_miss();
            return Ok(None);
        };

        if entry.is_expired_with(self.default_ttl) {
            // The write guard held across read and delete keeps this
            // sequence atomic with respect to concurrent writers.
            store.delete(key).await?;
            self.stats.record_miss();
            self.stats.record_expiration();
            debug!(cache = %self.name, key, "expired entry removed on read");
            return Ok(None);
        }

        self.stats.record_hit();
        Ok(Some(entry.into_data()))
    }

    // == Set ==
    /// Stores `data` under `key`, fully replacing any prior entry.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `data` - The payload to store
    /// * `ttl` - Optional TTL for this entry only. When `None`, the entry
    ///   follows the cache's default TTL as evaluated at read time.
    pub async fn set(
        &self,
        key: impl Into<String>,
        data: impl Into<Value>,
        ttl: Option<Duration>,
    ) -> Result<()> {
        let entry = CacheEntry::new(data.into(), ttl);
        self.store.write().await.write(key.into(), entry).await
    }

    // == Remove ==
    /// Deletes the entry for `key` if present.
    ///
    /// Removing an absent key is a no-op, not an error.
    pub async fn remove(&self, key: &str) -> Result<()> {
        self.store.write().await.delete(key).await
    }

    // == Stats ==
    /// Returns a snapshot of this cache's counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }
}

#[cfg(test)]
impl Cache<MemoryStore> {
    /// Number of entries currently in the backing store, expired included.
    pub(crate) async fn entry_count(&self) -> usize {
        self.store.read().await.len()
    }
}
