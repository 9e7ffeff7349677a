//! Error types for the cache library
//!
//! Provides unified error handling using thiserror.
//!
//! A missing or expired key is a normal `Ok(None)` result, never an error.
//! The only failure class is the backing store becoming unavailable, which
//! the default in-memory backend never raises.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backing store could not serve the operation.
    ///
    /// Only produced by non-memory backends (e.g. a network-backed store).
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_unavailable_display() {
        let err = CacheError::StoreUnavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "store unavailable: connection refused");
    }
}
