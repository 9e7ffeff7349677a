//! Cache Store Module
//!
//! Backing-store abstraction and the default in-memory implementation.
//!
//! A store is a plain keyed container with three primitives: read, write,
//! delete. No TTL policy lives here; expiration is evaluated by the cache
//! that owns the store. The trait is asynchronous and fallible so that a
//! remote backend (e.g. a network-backed store) can be substituted without
//! changing the cache or its callers.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::cache::CacheEntry;
use crate::error::Result;

// == Store Backend Trait ==
/// Backing store for a single cache instance.
///
/// Methods take `&mut self`: the owning cache serializes access through one
/// write guard, which also keeps its read-then-delete expiration sequence
/// atomic with respect to concurrent writes on the same key.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Reads the entry for `key`, or `None` if absent.
    async fn read(&mut self, key: &str) -> Result<Option<CacheEntry>>;

    /// Writes `entry` under `key`, fully replacing any prior entry.
    async fn write(&mut self, key: String, entry: CacheEntry) -> Result<()>;

    /// Deletes the entry for `key`. Deleting an absent key is a no-op.
    async fn delete(&mut self, key: &str) -> Result<()>;
}

// == Memory Store ==
/// Default in-memory backing store.
///
/// A dedicated map type keeps cache keys in their own namespace, so they
/// cannot collide with structural metadata or inherited properties. All
/// operations complete immediately and never fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the current number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl StoreBackend for MemoryStore {
    async fn read(&mut self, key: &str) -> Result<Option<CacheEntry>> {
        Ok(self.entries.get(key).cloned())
    }

    async fn write(&mut self, key: String, entry: CacheEntry) -> Result<()> {
        self.entries.insert(key, entry);
        Ok(())
    }

    async fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
