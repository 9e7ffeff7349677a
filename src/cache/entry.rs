//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

use serde_json::Value;

// == Cache Entry ==
/// Represents a single cache entry: an opaque payload plus TTL metadata.
///
/// An entry is immutable once constructed; overwriting a key replaces the
/// whole entry rather than mutating fields in place. Only the TTL override
/// is stored here. Entries written without one resolve against the owning
/// cache's default TTL at each read, so they follow the cache's current
/// policy rather than the policy at write time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, never inspected by the cache
    data: Value,
    /// Creation instant, captured at construction
    created_at: Instant,
    /// Per-entry TTL override, None = use the cache default
    ttl_override: Option<Duration>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with an optional per-entry TTL override.
    ///
    /// # Arguments
    /// * `data` - The payload to store
    /// * `ttl_override` - Optional TTL for this entry only
    pub fn new(data: Value, ttl_override: Option<Duration>) -> Self {
        Self {
            data,
            created_at: Instant::now(),
            ttl_override,
        }
    }

    /// Returns a reference to the stored payload.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Consumes the entry and returns the stored payload.
    pub fn into_data(self) -> Value {
        self.data
    }

    /// Returns the instant this entry was created.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the per-entry TTL override, if one was given at write time.
    pub fn ttl_override(&self) -> Option<Duration> {
        self.ttl_override
    }

    // == Age ==
    /// Returns the time elapsed since this entry was created.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has expired against the given default TTL.
    ///
    /// The effective TTL is the per-entry override when present, otherwise
    /// `default_ttl`. A zero effective TTL means the entry never expires.
    ///
    /// Boundary condition: an entry is expired only once its age strictly
    /// exceeds the effective TTL, so a read at exactly `created_at + ttl`
    /// still returns the payload.
    pub fn is_expired_with(&self, default_ttl: Duration) -> bool {
        let effective_ttl = self.ttl_override.unwrap_or(default_ttl);
        !effective_ttl.is_zero() && self.age() > effective_ttl
    }

    /// Creates an entry whose creation instant lies `age` in the past.
    #[cfg(test)]
    pub(crate) fn backdated(data: Value, ttl_override: Option<Duration>, age: Duration) -> Self {
        Self {
            data,
            created_at: Instant::now() - age,
            ttl_override,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_creation_no_override() {
        let entry = CacheEntry::new(json!("test_value"), None);

        assert_eq!(entry.data(), &json!("test_value"));
        assert!(entry.ttl_override().is_none());
        assert!(!entry.is_expired_with(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_creation_with_override() {
        let entry = CacheEntry::new(json!(42), Some(Duration::from_secs(5)));

        assert_eq!(entry.ttl_override(), Some(Duration::from_secs(5)));
        assert!(!entry.is_expired_with(Duration::ZERO));
    }

    #[test]
    fn test_zero_default_ttl_never_expires() {
        let entry = CacheEntry::backdated(json!("old"), None, Duration::from_secs(3600));

        assert!(!entry.is_expired_with(Duration::ZERO));
    }

    #[test]
    fn test_zero_override_never_expires() {
        // An explicit zero override wins over a finite default.
        let entry = CacheEntry::backdated(
            json!("old"),
            Some(Duration::ZERO),
            Duration::from_secs(3600),
        );

        assert!(!entry.is_expired_with(Duration::from_secs(1)));
    }

    #[test]
    fn test_expired_against_default() {
        let entry = CacheEntry::backdated(json!("old"), None, Duration::from_millis(150));

        assert!(entry.is_expired_with(Duration::from_millis(100)));
    }

    #[test]
    fn test_not_expired_before_default_elapses() {
        let entry = CacheEntry::backdated(json!("fresh"), None, Duration::from_millis(50));

        assert!(!entry.is_expired_with(Duration::from_millis(100)));
    }

    #[test]
    fn test_override_takes_precedence_over_default() {
        // Aged past the override but not the default: the override decides.
        let entry = CacheEntry::backdated(
            json!("v"),
            Some(Duration::from_millis(100)),
            Duration::from_millis(200),
        );

        assert!(entry.is_expired_with(Duration::from_secs(60)));
    }

    #[test]
    fn test_age_grows_from_creation() {
        let entry = CacheEntry::new(json!("v"), None);
        let age = entry.age();

        assert!(age < Duration::from_secs(1));
        assert!(entry.age() >= age);
    }

    #[test]
    fn test_into_data_returns_payload() {
        let entry = CacheEntry::new(json!({"id": 1}), None);

        assert_eq!(entry.into_data(), json!({"id": 1}));
    }
}
