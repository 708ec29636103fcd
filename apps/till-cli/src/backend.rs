//! Runtime-selected cache backend.
//!
//! The aggregator is generic over its cache; this enum lets the CLI pick the
//! store from configuration and still hand the aggregator one concrete type.

use std::time::Duration;

use async_trait::async_trait;
use till_cache::{CacheProvider, CacheResult, CacheValue, MemoryCacheProvider, RedisCacheProvider};
use tracing::info;

use crate::config::CacheConfig;

/// One of the supported cache stores.
#[derive(Debug, Clone)]
pub enum CacheBackend {
    Memory(MemoryCacheProvider),
    Redis(RedisCacheProvider),
}

impl CacheBackend {
    /// Builds (and for Redis, connects) the configured backend.
    pub async fn connect(config: &CacheConfig) -> CacheResult<Self> {
        let backend = match config {
            CacheConfig::Memory => CacheBackend::Memory(MemoryCacheProvider::new()),
            CacheConfig::Redis { url } => CacheBackend::Redis(RedisCacheProvider::connect(url).await?),
        };

        info!(backend = %config, "Cache backend ready");
        Ok(backend)
    }
}

#[async_trait]
impl CacheProvider for CacheBackend {
    async fn get<V: CacheValue>(&self, key: &str) -> CacheResult<Option<V>> {
        match self {
            CacheBackend::Memory(cache) => cache.get(key).await,
            CacheBackend::Redis(cache) => cache.get(key).await,
        }
    }

    async fn set<V: CacheValue>(&self, key: &str, value: &V, ttl: Duration) -> CacheResult<()> {
        match self {
            CacheBackend::Memory(cache) => cache.set(key, value, ttl).await,
            CacheBackend::Redis(cache) => cache.set(key, value, ttl).await,
        }
    }

    async fn remove(&self, key: &str) -> CacheResult<()> {
        match self {
            CacheBackend::Memory(cache) => cache.remove(key).await,
            CacheBackend::Redis(cache) => cache.remove(key).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use till_cache::CacheError;

    use super::*;

    #[tokio::test]
    async fn test_memory_backend_delegates() {
        let backend = CacheBackend::connect(&CacheConfig::Memory).await.unwrap();
        backend
            .set("ShoppingCart-1", &"cart".to_string(), Duration::from_secs(600))
            .await
            .unwrap();

        let value: Option<String> = backend.get("ShoppingCart-1").await.unwrap();
        assert_eq!(value.as_deref(), Some("cart"));

        backend.remove("ShoppingCart-1").await.unwrap();
        let value: Option<String> = backend.get("ShoppingCart-1").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_bad_redis_url_fails_to_connect() {
        let config = CacheConfig::Redis {
            url: "definitely not a url".to_string(),
        };

        let result = CacheBackend::connect(&config).await;
        assert!(matches!(result, Err(CacheError::Connection(_))));
    }
}
