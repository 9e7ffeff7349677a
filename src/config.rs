//! Configuration Module
//!
//! Per-cache creation options passed to the registry.

use std::time::Duration;

/// Options applied when a named cache is first created.
///
/// The registry honors these only on the call that creates the instance;
/// later lookups of the same name return the existing cache unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// Default TTL for entries written without an explicit override.
    /// A zero duration means entries never expire.
    pub ttl: Duration,
}

impl CacheOptions {
    /// Creates options with the default settings (no expiration).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default TTL for the cache.
    ///
    /// # Arguments
    /// * `ttl` - Maximum age of an entry before a read treats it as expired
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            ttl: Duration::ZERO,
        }
    }
}
