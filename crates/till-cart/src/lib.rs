//! # till-cart: Cart Aggregation Service
//!
//! The single inbound operation of Till:
//! [`CartAggregator::add_products`].
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  let cache = MemoryCacheProvider::new();      // or RedisCacheProvider  │
//! │  let carts = CartAggregator::new(cache);                                │
//! │  let cart  = carts.add_products(&items, "12345").await?;                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cache is injected, never global: the adapter that builds the
//! aggregator owns the cache's lifecycle.

pub mod aggregator;
pub mod error;
pub mod settings;

pub use aggregator::CartAggregator;
pub use error::{CartError, CartResult};
pub use settings::CartSettings;
