//! Memocache - a lightweight named cache with per-entry TTL
//!
//! An embeddable memoization layer: caches are looked up by name through a
//! registry so independent call sites share one instance, entries expire
//! lazily on read, and the interface is asynchronous so the in-memory
//! backing store can later be swapped for a remote one without touching
//! call sites.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use memocache::{CacheOptions, CacheRegistry};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> memocache::Result<()> {
//!     let registry: CacheRegistry = CacheRegistry::new();
//!
//!     let sessions = registry.get_cache(
//!         "sessions",
//!         Some(CacheOptions::new().with_ttl(Duration::from_secs(60))),
//!     );
//!
//!     sessions.set("user:1", json!({"id": 1}), None).await?;
//!     if let Some(user) = sessions.get("user:1").await? {
//!         println!("cached: {user}");
//!     }
//!     sessions.remove("user:1").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod registry;

pub use cache::{Cache, CacheEntry, CacheStats, MemoryStore, StoreBackend};
pub use config::CacheOptions;
pub use error::{CacheError, Result};
pub use registry::CacheRegistry;
