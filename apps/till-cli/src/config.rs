//! Till CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to the
//! business defaults in `till-core`.
//!
//! | Variable                 | Default         |
//! |--------------------------|-----------------|
//! | `TILL_CACHE_BACKEND`     | `memory`        |
//! | `REDIS_URL`              | required for `redis` |
//! | `TILL_CACHE_KEY_PREFIX`  | `ShoppingCart`  |
//! | `TILL_CART_TTL_SECS`     | `600`           |
//! | `TILL_SALES_TAX_BPS`     | `1250`          |

use std::env;
use std::fmt;
use std::time::Duration;

use till_cart::CartSettings;
use till_core::{TaxRate, CART_TTL_SECS, SALES_TAX_RATE, SHOPPING_CART_KEY_PREFIX};

/// Which cache the aggregator talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheConfig {
    /// Process-local cache; carts live only as long as this process.
    Memory,

    /// Shared Redis cache.
    Redis { url: String },
}

impl fmt::Display for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheConfig::Memory => f.write_str("memory"),
            CacheConfig::Redis { .. } => f.write_str("redis"),
        }
    }
}

/// Till CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TillConfig {
    /// Cache backend
    pub cache: CacheConfig,

    /// Cart key namespace
    pub key_prefix: String,

    /// Cart lifetime in seconds
    pub cart_ttl_secs: u64,

    /// Sales tax in basis points
    pub sales_tax_bps: u32,
}

impl TillConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from any name → value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache = match lookup("TILL_CACHE_BACKEND")
            .unwrap_or_else(|| "memory".to_string())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" => CacheConfig::Memory,
            "redis" => CacheConfig::Redis {
                url: lookup("REDIS_URL")
                    .ok_or_else(|| ConfigError::MissingRequired("REDIS_URL".to_string()))?,
            },
            _ => return Err(ConfigError::InvalidValue("TILL_CACHE_BACKEND".to_string())),
        };

        let config = TillConfig {
            cache,

            key_prefix: lookup("TILL_CACHE_KEY_PREFIX")
                .unwrap_or_else(|| SHOPPING_CART_KEY_PREFIX.to_string()),

            cart_ttl_secs: lookup("TILL_CART_TTL_SECS")
                .unwrap_or_else(|| CART_TTL_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TILL_CART_TTL_SECS".to_string()))?,

            sales_tax_bps: lookup("TILL_SALES_TAX_BPS")
                .unwrap_or_else(|| SALES_TAX_RATE.bps().to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TILL_SALES_TAX_BPS".to_string()))?,
        };

        if config.key_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue("TILL_CACHE_KEY_PREFIX".to_string()));
        }

        Ok(config)
    }

    /// The aggregator settings this configuration describes.
    pub fn cart_settings(&self) -> CartSettings {
        CartSettings {
            key_prefix: self.key_prefix.clone(),
            sales_tax_rate: TaxRate::from_bps(self.sales_tax_bps),
            ttl: Duration::from_secs(self.cart_ttl_secs),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<TillConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TillConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.cache, CacheConfig::Memory);
        assert_eq!(config.cart_settings(), CartSettings::default());
    }

    #[test]
    fn test_redis_backend() {
        let config = config_from(&[
            ("TILL_CACHE_BACKEND", "Redis"),
            ("REDIS_URL", "redis://localhost:6379/0"),
        ])
        .unwrap();

        assert_eq!(
            config.cache,
            CacheConfig::Redis {
                url: "redis://localhost:6379/0".to_string()
            }
        );
        assert_eq!(config.cache.to_string(), "redis");
    }

    #[test]
    fn test_redis_requires_url() {
        let err = config_from(&[("TILL_CACHE_BACKEND", "redis")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(ref v) if v == "REDIS_URL"));
    }

    #[test]
    fn test_unknown_backend() {
        let err = config_from(&[("TILL_CACHE_BACKEND", "memcached")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("TILL_CACHE_KEY_PREFIX", "Basket"),
            ("TILL_CART_TTL_SECS", "60"),
            ("TILL_SALES_TAX_BPS", "800"),
        ])
        .unwrap();

        let settings = config.cart_settings();
        assert_eq!(settings.key_prefix, "Basket");
        assert_eq!(settings.ttl, Duration::from_secs(60));
        assert_eq!(settings.sales_tax_rate, TaxRate::from_bps(800));
    }

    #[test]
    fn test_invalid_numbers() {
        let err = config_from(&[("TILL_CART_TTL_SECS", "ten minutes")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v) if v == "TILL_CART_TTL_SECS"));

        let err = config_from(&[("TILL_SALES_TAX_BPS", "-5")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v) if v == "TILL_SALES_TAX_BPS"));
    }

    #[test]
    fn test_blank_prefix_rejected() {
        let err = config_from(&[("TILL_CACHE_KEY_PREFIX", "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }
}
