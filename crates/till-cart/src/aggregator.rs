//! # Cart Aggregator
//!
//! Turns a batch of purchased line items into the customer's current cart.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    add_products(items, customer_id)                     │
//! │                                                                         │
//! │  1. Cart::new(customer_id)                                              │
//! │  2. items empty? ─────────────────────────────► return empty cart       │
//! │                                                 (cache never touched)   │
//! │  3. consolidate(items)           one line per product, first item wins  │
//! │  4. key = "{prefix}-{customer_id}"                                      │
//! │  5. cache.get(key), then cache.remove(key)     consume prior state      │
//! │  6. merge_lines(existing, batch) unmatched batch lines are dropped      │
//! │  7. apply_sales_tax              only with ≥ 2 distinct products        │
//! │  8. lines? ──► cache.set(key, cart, ttl)                                │
//! │  9. return cart                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Steps 5 to 8 are not atomic. Two concurrent calls for the SAME customer
//! can both read the same prior cart, merge independently, and the last
//! `set` wins; the other call's contribution is lost. Different customers
//! use different keys and never interfere. Making this strict needs a
//! per-key lock or compare-and-swap in the cache, which changes the
//! contract of [`CacheProvider`].

use till_cache::CacheProvider;
use till_core::{consolidate, merge_lines, Cart, LineItem, PercentageTaxCalculator, TaxCalculator};
use tracing::{debug, info};

use crate::error::CartResult;
use crate::settings::CartSettings;

/// Aggregates line items into per-customer carts kept in a TTL cache.
///
/// ## Example
/// ```rust
/// use till_cache::MemoryCacheProvider;
/// use till_cart::CartAggregator;
/// use till_core::{LineItem, Money};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let aggregator = CartAggregator::new(MemoryCacheProvider::new());
///
/// let cart = aggregator
///     .add_products(&[LineItem::new("DoveSoap", 1, Money::from_cents(3999))], "12345")
///     .await
///     .unwrap();
///
/// assert_eq!(cart.subtotal().unwrap(), Money::from_cents(3999));
/// assert!(cart.tax_amount.is_zero());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CartAggregator<C, T = PercentageTaxCalculator> {
    cache: C,
    tax_calculator: T,
    settings: CartSettings,
}

impl<C: CacheProvider> CartAggregator<C> {
    /// Creates an aggregator with the flat percentage calculator and the
    /// default settings.
    pub fn new(cache: C) -> Self {
        Self::with_parts(cache, PercentageTaxCalculator, CartSettings::default())
    }
}

impl<C, T> CartAggregator<C, T>
where
    C: CacheProvider,
    T: TaxCalculator,
{
    /// Creates an aggregator from explicit parts.
    pub fn with_parts(cache: C, tax_calculator: T, settings: CartSettings) -> Self {
        CartAggregator {
            cache,
            tax_calculator,
            settings,
        }
    }

    /// Replaces the settings.
    pub fn with_settings(mut self, settings: CartSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the active settings.
    pub fn settings(&self) -> &CartSettings {
        &self.settings
    }

    /// Returns the cache this aggregator reads and writes.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Cache key holding a customer's cart: `"{prefix}-{customer_id}"`.
    pub fn cache_key(&self, customer_id: &str) -> String {
        format!("{}-{}", self.settings.key_prefix, customer_id)
    }

    /// Adds a batch of line items to a customer's cart.
    ///
    /// An empty batch returns an empty cart without touching the cache, so a
    /// cached cart survives it. A batch whose products are all new to an
    /// existing cart leaves that cart's lines as they were (the new products
    /// are dropped; see [`merge_lines`]).
    ///
    /// ## Errors
    /// - `CartError::Cache` when the cache fails.
    /// - `CartError::Calculation` when an amount overflows. A line total
    ///   overflow is caught before the cache is touched; a merged total or
    ///   tax overflow happens after the read.
    ///
    /// In both cases the prior entry may already have been removed.
    pub async fn add_products(&self, items: &[LineItem], customer_id: &str) -> CartResult<Cart> {
        let mut cart = Cart::new(customer_id);

        if items.is_empty() {
            debug!(customer_id = %customer_id, "No items supplied, returning empty cart");
            return Ok(cart);
        }

        let batch = consolidate(items)?;
        debug!(
            customer_id = %customer_id,
            items = items.len(),
            lines = batch.len(),
            "Consolidated batch"
        );

        let key = self.cache_key(customer_id);
        let existing: Option<Cart> = self.cache.get(&key).await?;
        self.cache.remove(&key).await?;

        debug!(
            customer_id = %customer_id,
            found = existing.is_some(),
            "Consumed cached cart"
        );

        cart.lines = merge_lines(existing.map(|c| c.lines), batch)?;
        cart.apply_sales_tax(&self.tax_calculator, self.settings.sales_tax_rate)?;
        let total = cart.total()?;

        if !cart.is_empty() {
            self.cache.set(&key, &cart, self.settings.ttl).await?;
            info!(
                customer_id = %customer_id,
                lines = cart.lines.len(),
                tax = %cart.tax_amount,
                total = %total,
                "Cart saved"
            );
        }

        Ok(cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
