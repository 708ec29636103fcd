//! # Cache Provider Capability
//!
//! The one seam between business logic and storage.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart Aggregator                                                        │
//! │       │                                                                 │
//! │       │  cache.get::<Cart>(key) / cache.set(key, &cart, ttl)            │
//! │       ▼                                                                 │
//! │  impl CacheProvider                                                     │
//! │  ├── MemoryCacheProvider (tests, single process)                        │
//! │  └── RedisCacheProvider  (shared across processes)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Implementations own their lifecycle; the aggregator only borrows the
//! capability, so swapping stores never touches cart code.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CacheResult;

/// Anything that can live in a cache: storable in-process and over the wire.
pub trait CacheValue: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {}

impl<T> CacheValue for T where T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {}

/// Typed get/set/remove against a key-value store with per-entry TTL.
#[async_trait]
pub trait CacheProvider: Send + Sync {
    /// Looks up `key`.
    ///
    /// Returns `Ok(None)` on a miss, on an expired entry, and when the stored
    /// value is not a `V`.
    async fn get<V: CacheValue>(&self, key: &str) -> CacheResult<Option<V>>;

    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// Overwrites any existing entry unconditionally.
    async fn set<V: CacheValue>(&self, key: &str, value: &V, ttl: Duration) -> CacheResult<()>;

    /// Deletes `key`. A missing key is not an error.
    async fn remove(&self, key: &str) -> CacheResult<()>;
}
