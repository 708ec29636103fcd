//! # Cart Settings
//!
//! The fixed business constants, bundled so an adapter can externalize them
//! without the aggregator knowing where they came from.
//!
//! | Setting          | Default         |
//! |------------------|-----------------|
//! | `key_prefix`     | `ShoppingCart`  |
//! | `sales_tax_rate` | 12.5% (1250bps) |
//! | `ttl`            | 600 seconds     |

use std::time::Duration;

use till_core::{TaxRate, CART_TTL_SECS, SALES_TAX_RATE, SHOPPING_CART_KEY_PREFIX};

/// Constants driving the cart pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSettings {
    /// Namespace prefix of cart cache keys.
    pub key_prefix: String,

    /// Rate applied to carts with two or more distinct products.
    pub sales_tax_rate: TaxRate,

    /// Lifetime of a cart in the cache after each write.
    pub ttl: Duration,
}

impl Default for CartSettings {
    fn default() -> Self {
        CartSettings {
            key_prefix: SHOPPING_CART_KEY_PREFIX.to_string(),
            sales_tax_rate: SALES_TAX_RATE,
            ttl: Duration::from_secs(CART_TTL_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_business_constants() {
        let settings = CartSettings::default();
        assert_eq!(settings.key_prefix, "ShoppingCart");
        assert_eq!(settings.sales_tax_rate.bps(), 1250);
        assert_eq!(settings.ttl, Duration::from_secs(600));
    }
}
