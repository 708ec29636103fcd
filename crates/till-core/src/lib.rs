//! # till-core: Pure Business Logic for Till
//!
//! This crate is the **heart** of Till. It holds the cart model and every
//! business rule as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Till Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Adapters (apps/till-cli, ...)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               till-cart (Cart Aggregator)                       │   │
//! │  │    read cache ──► merge ──► tax ──► write cache                 │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────┐  ┌────────────▼────────────────────┐  │
//! │  │ ★ till-core (THIS CRATE) ★  │  │  till-cache (Memory / Redis)    │  │
//! │  │  Money · Tax · Cart math    │  │  get / set(ttl) / remove        │  │
//! │  │  NO I/O • PURE FUNCTIONS    │  │                                 │  │
//! │  └─────────────────────────────┘  └─────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact decimal `Money` with 2-place rounding
//! - [`types`] - `LineItem` and `TaxRate`
//! - [`cart`] - `Cart`, `CartLine`, consolidation and merge
//! - [`tax`] - Flat-rate tax calculation
//! - [`validation`] - Adapter input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{consolidate, Cart, LineItem, Money, PercentageTaxCalculator, SALES_TAX_RATE};
//!
//! let items = [
//!     LineItem::new("DoveSoap", 2, Money::from_cents(3999)),
//!     LineItem::new("AxeDeos", 2, Money::from_cents(9999)),
//! ];
//!
//! let mut cart = Cart::new("12345");
//! cart.lines = consolidate(&items)?;
//! cart.apply_sales_tax(&PercentageTaxCalculator, SALES_TAX_RATE)?;
//!
//! assert_eq!(cart.tax_amount, Money::from_cents(3500));
//! # Ok::<(), till_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{consolidate, merge_lines, Cart, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use tax::{calculate_tax, PercentageTaxCalculator, TaxCalculator};
pub use types::{LineItem, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Namespace prefix of every cart cache key (`ShoppingCart-{customer_id}`).
pub const SHOPPING_CART_KEY_PREFIX: &str = "ShoppingCart";

/// Flat sales-tax rate applied to carts with two or more distinct products.
pub const SALES_TAX_RATE: TaxRate = TaxRate::from_bps(1250);

/// How long a cart lives in the cache after its last write.
pub const CART_TTL_SECS: u64 = 600;

/// Decimal places kept by every rounded monetary value.
pub const MONEY_SCALE: u32 = 2;
