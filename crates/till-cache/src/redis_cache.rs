//! # Redis Cache
//!
//! A networked [`CacheProvider`] so several processes see the same carts.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set(key, &cart, 600s)  ──►  SET ShoppingCart-12345 '{"customerId":..}' │
//! │                               EX 600                                    │
//! │  get::<Cart>(key)       ──►  GET ShoppingCart-12345 → JSON → Cart       │
//! │  remove(key)            ──►  DEL ShoppingCart-12345                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Expiry is Redis' own `EX`. A payload that no longer decodes into the
//! requested type (schema drift, foreign writer) is reported as a miss.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, info, warn};

use crate::error::CacheResult;
use crate::provider::{CacheProvider, CacheValue};

/// Redis-backed cache.
///
/// Cloning is cheap and shares the underlying multiplexed connection, which
/// reconnects on its own after a drop.
#[derive(Clone)]
pub struct RedisCacheProvider {
    conn: ConnectionManager,
}

impl RedisCacheProvider {
    /// Connects to the Redis server at `url` (`redis://host:6379/0`).
    ///
    /// ## Errors
    /// `CacheError::Connection` if the URL is malformed or the server is
    /// unreachable.
    pub async fn connect(url: &str) -> CacheResult<Self> {
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        info!("Connected to Redis cache");
        Ok(Self { conn })
    }
}

impl fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCacheProvider").finish_non_exhaustive()
    }
}

/// Decodes a stored payload, turning a type mismatch into a miss.
fn decode<V: CacheValue>(key: &str, payload: &str) -> Option<V> {
    match serde_json::from_str(payload) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Cached payload does not match requested type, treating as miss");
            None
        }
    }
}

/// Redis rejects `EX 0`; anything shorter than a second is rounded up.
fn expiry_secs(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get<V: CacheValue>(&self, key: &str) -> CacheResult<Option<V>> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = conn.get(key).await?;

        Ok(payload.and_then(|p| decode(key, &p)))
    }

    async fn set<V: CacheValue>(&self, key: &str, value: &V, ttl: Duration) -> CacheResult<()> {
        let payload = serde_json::to_string(value)?;
        let seconds = expiry_secs(ttl);

        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, payload, seconds).await?;

        debug!(key, ttl_secs = seconds, "Cache set");
        Ok(())
    }

    async fn remove(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await?;

        debug!(key, "Cache remove");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::error::CacheError;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        customer_id: String,
    }

    #[test]
    fn test_decode_matching_payload() {
        let value: Option<Snapshot> = decode("k", r#"{"customer_id":"12345"}"#);
        assert_eq!(
            value,
            Some(Snapshot {
                customer_id: "12345".to_string()
            })
        );
    }

    #[test]
    fn test_decode_mismatch_is_miss() {
        let value: Option<Snapshot> = decode("k", "42");
        assert!(value.is_none());
    }

    #[test]
    fn test_expiry_never_zero() {
        assert_eq!(expiry_secs(Duration::from_secs(600)), 600);
        assert_eq!(expiry_secs(Duration::from_millis(10)), 1);
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let result = RedisCacheProvider::connect("not a redis url").await;
        assert!(
            matches!(result, Err(CacheError::Connection(_))),
            "expected Connection error, got {result:?}"
        );
    }
}
