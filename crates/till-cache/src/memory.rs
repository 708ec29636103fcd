//! # In-Memory Cache
//!
//! A process-local TTL map.
//!
//! ## Thread Safety
//! Entries sit behind `Arc<RwLock<..>>`:
//! 1. Clones of the provider share one store
//! 2. Lookups take a read lock; writes and evictions take a write lock
//! 3. A lock is held for a single operation only, never across callers'
//!    read-modify-write sequences
//!
//! ## Expiry
//! ```text
//! set(key, v, 600s) at t=0
//!      │
//!      ├── get(key) at t=599s ──► Some(v)
//!      │
//!      └── get(key) at t=600s ──► None (entry dropped on the way out)
//! ```
//! Every `set` also sweeps all expired entries, so keys that are never read
//! again do not pile up. Time comes from `tokio::time::Instant`, so tests
//! can pause and advance it.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::error::CacheResult;
use crate::provider::{CacheProvider, CacheValue};

#[derive(Debug)]
struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Process-local cache with absolute per-entry expiry.
///
/// Values are stored as-is (no serialization); reading a key as a different
/// type than it was written with is a miss.
#[derive(Debug, Clone, Default)]
pub struct MemoryCacheProvider {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryCacheProvider {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries that have not expired yet.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        let entries = self.entries.read().await;
        entries.values().filter(|e| !e.is_expired(now)).count()
    }

    /// Checks if no live entry remains.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drops every expired entry and returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        sweep(&mut entries, Instant::now())
    }
}

fn sweep(entries: &mut HashMap<String, Entry>, now: Instant) -> usize {
    let before = entries.len();
    entries.retain(|_, e| !e.is_expired(now));
    let purged = before - entries.len();

    if purged > 0 {
        debug!(purged, "Purged expired cache entries");
    }
    purged
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get<V: CacheValue>(&self, key: &str) -> CacheResult<Option<V>> {
        let now = Instant::now();

        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => {
                    trace!(key, "Cache miss");
                    return Ok(None);
                }
                Some(entry) if !entry.is_expired(now) => {
                    let value = entry.value.downcast_ref::<V>().cloned();
                    if value.is_none() {
                        debug!(key, "Cached value has a different type, treating as miss");
                    }
                    return Ok(value);
                }
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|e| e.is_expired(now)) {
            entries.remove(key);
            trace!(key, "Cache entry expired");
        }
        Ok(None)
    }

    async fn set<V: CacheValue>(&self, key: &str, value: &V, ttl: Duration) -> CacheResult<()> {
        let now = Instant::now();
        let entry = Entry {
            value: Arc::new(value.clone()),
            expires_at: now + ttl,
        };

        let mut entries = self.entries.write().await;
        sweep(&mut entries, now);
        entries.insert(key.to_string(), entry);
        trace!(key, ttl_secs = ttl.as_secs(), "Cache set");
        Ok(())
    }

    async fn remove(&self, key: &str) -> CacheResult<()> {
        self.entries.write().await.remove(key);
        trace!(key, "Cache remove");
        Ok(())
    }
}
