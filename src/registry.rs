//! Registry Module
//!
//! Maps cache names to shared cache instances.
//!
//! The registry is an explicit object owned by the host application rather
//! than an implicit global: construct one at startup and hand it to the
//! components that need caching. Independent call sites asking for the same
//! name receive the same instance, which makes sharing work without
//! explicit dependency injection of each cache.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::cache::{Cache, MemoryStore, StoreBackend};
use crate::config::CacheOptions;

// == Cache Registry ==
/// Registry of named cache instances.
///
/// Instances are created lazily: the first lookup of a name constructs the
/// cache with that caller's options, and every later lookup of the same
/// name returns the existing instance unchanged. Caches live for the
/// lifetime of the registry; there is no removal or teardown operation.
#[derive(Debug)]
pub struct CacheRegistry<B: StoreBackend + Default = MemoryStore> {
    /// Name to instance mapping
    caches: RwLock<HashMap<String, Arc<Cache<B>>>>,
}

impl<B: StoreBackend + Default> CacheRegistry<B> {
    // == Constructor ==
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            caches: RwLock::new(HashMap::new()),
        }
    }

    // == Get Cache ==
    /// Returns the cache registered under `name`, creating it on first use.
    ///
    /// Options are honored only by the call that creates the instance;
    /// passing different options for an existing name has no effect.
    ///
    /// # Arguments
    /// * `name` - Caller-chosen namespace identifying the cache
    /// * `options` - Creation options, `None` for the defaults
    pub fn get_cache(&self, name: &str, options: Option<CacheOptions>) -> Arc<Cache<B>> {
        {
            let caches = self.caches.read().expect("registry lock poisoned");
            if let Some(cache) = caches.get(name) {
                return Arc::clone(cache);
            }
        }

        let mut caches = self.caches.write().expect("registry lock poisoned");
        // Re-check under the write lock: a racing caller may have created
        // the instance in the meantime, and its options win.
        let cache = caches.entry(name.to_string()).or_insert_with(|| {
            let ttl = options.unwrap_or_default().ttl;
            debug!(name, default_ttl_ms = ttl.as_millis() as u64, "created cache instance");
            Arc::new(Cache::new(name, ttl, B::default()))
        });
        Arc::clone(cache)
    }

    // == Length ==
    /// Returns the number of cache instances created so far.
    pub fn len(&self) -> usize {
        self.caches.read().expect("registry lock poisoned").len()
    }

    // == Is Empty ==
    /// Returns true if no cache has been created yet.
    pub fn is_empty(&self) -> bool {
        self.caches.read().expect("registry lock poisoned").is_empty()
    }

    // == Contains ==
    /// Checks whether a cache has been created under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.caches
            .read()
            .expect("registry lock poisoned")
            .contains_key(name)
    }

    // == Names ==
    /// Returns the names of all created caches, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .caches
            .read()
            .expect("registry lock poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

impl<B: StoreBackend + Default> Default for CacheRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}
