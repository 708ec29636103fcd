//! # Cart Model
//!
//! The per-customer cart and the pure math that builds it.
//!
//! ## Cart Math Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One add_products Call                                │
//! │                                                                         │
//! │  [LineItem, LineItem, ...]                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  consolidate() ──► one CartLine per product code (first item wins)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  merge_lines(existing?, batch) ──► accumulate into cached lines         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Cart::apply_sales_tax() ──► tax only with ≥ 2 distinct products        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Quirks (kept on purpose)
//! - Within one batch, a repeated product code keeps only the FIRST
//!   occurrence's quantity and price. Later duplicates are ignored.
//! - When merging into an existing cart, a batch line whose product code is
//!   not already in the cart is dropped, not appended.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::tax::TaxCalculator;
use crate::types::{LineItem, TaxRate};

// =============================================================================
// Cart Line
// =============================================================================

/// One distinct product inside a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product code; unique within a cart.
    pub product_code: String,

    /// Units of this product across every merged call.
    pub quantity: u32,

    /// Rounded `unit_price × quantity` for a fresh batch, or the running sum
    /// of those across merges.
    pub line_total: Money,
}

impl CartLine {
    /// Builds a line from a single line item, rounding the total to cents.
    pub fn from_line_item(item: &LineItem) -> CoreResult<Self> {
        let line_total = item
            .unit_price
            .multiply_quantity(item.quantity)
            .ok_or(CoreError::AmountOverflow {
                operation: "line total",
            })?;

        Ok(CartLine {
            product_code: item.product_code.clone(),
            quantity: item.quantity,
            line_total: line_total.round_to_cents(),
        })
    }

    /// Adds another line's quantity and total into this one.
    fn absorb(&mut self, other: &CartLine) -> CoreResult<()> {
        self.line_total = self
            .line_total
            .checked_add(other.line_total)
            .ok_or(CoreError::AmountOverflow {
                operation: "line total",
            })?;
        self.quantity = self.quantity.saturating_add(other.quantity);
        Ok(())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A customer's shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_code`, in first-seen order
/// - `tax_amount` is non-zero only with 2 or more distinct product codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Customer this cart belongs to.
    pub customer_id: String,

    /// Lines in the cart. Empty means "no cart".
    #[serde(default)]
    pub lines: Vec<CartLine>,

    /// Sales tax on the whole cart, rounded to cents.
    #[serde(default)]
    pub tax_amount: Money,
}

impl Cart {
    /// Creates a new empty cart for a customer.
    pub fn new(customer_id: impl Into<String>) -> Self {
        Cart {
            customer_id: customer_id.into(),
            lines: Vec::new(),
            tax_amount: Money::zero(),
        }
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct product codes.
    pub fn distinct_products(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.product_code.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of all line totals (before tax).
    pub fn subtotal(&self) -> CoreResult<Money> {
        Money::checked_sum(self.lines.iter().map(|line| line.line_total)).ok_or(
            CoreError::AmountOverflow {
                operation: "subtotal",
            },
        )
    }

    /// Subtotal plus tax.
    pub fn total(&self) -> CoreResult<Money> {
        self.subtotal()?
            .checked_add(self.tax_amount)
            .ok_or(CoreError::AmountOverflow { operation: "total" })
    }

    /// Looks up a line by product code.
    pub fn line(&self, product_code: &str) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| line.product_code == product_code)
    }

    /// Recomputes the sales tax.
    ///
    /// ## Rules
    /// - No lines: nothing to do
    /// - One distinct product: tax is zero, however large the total
    /// - Two or more: `round(calculator(subtotal, rate), 2)`
    ///
    /// ## Errors
    /// `CoreError::AmountOverflow` if the subtotal or the tax overflows.
    /// The previous tax amount is kept in that case.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Cart, CartLine, Money, PercentageTaxCalculator, TaxRate};
    ///
    /// let mut cart = Cart::new("12345");
    /// cart.lines = vec![
    ///     CartLine { product_code: "DoveSoap".into(), quantity: 2, line_total: Money::from_cents(7998) },
    ///     CartLine { product_code: "AxeDeos".into(), quantity: 2, line_total: Money::from_cents(19998) },
    /// ];
    /// cart.apply_sales_tax(&PercentageTaxCalculator, TaxRate::from_bps(1250)).unwrap();
    /// assert_eq!(cart.tax_amount, Money::from_cents(3500));
    /// ```
    pub fn apply_sales_tax<T>(&mut self, calculator: &T, rate: TaxRate) -> CoreResult<()>
    where
        T: TaxCalculator + ?Sized,
    {
        if self.lines.is_empty() {
            return Ok(());
        }

        if self.distinct_products() <= 1 {
            self.tax_amount = Money::zero();
            return Ok(());
        }

        self.tax_amount = calculator
            .calculate_tax(self.subtotal()?, rate)?
            .round_to_cents();
        Ok(())
    }
}

// =============================================================================
// Cart Math
// =============================================================================

/// Collapses a batch of line items into one line per product code.
///
/// Groups keep the order in which each code first appears. Each group uses
/// only its first item; later items with the same code are ignored even if
/// their quantity or price differ.
///
/// Fails only if a kept item's `unit_price × quantity` overflows.
pub fn consolidate(items: &[LineItem]) -> CoreResult<Vec<CartLine>> {
    let mut seen = HashSet::new();

    items
        .iter()
        .filter(|item| seen.insert(item.product_code.as_str()))
        .map(CartLine::from_line_item)
        .collect()
}

/// Merges a freshly consolidated batch into previously cached lines.
///
/// - Existing lines and a non-empty batch: matching lines accumulate in
///   place; batch lines without a match are dropped. Returns the existing
///   lines.
/// - Otherwise: returns the batch as-is (possibly empty).
///
/// Fails if an accumulated line total overflows.
pub fn merge_lines(
    existing: Option<Vec<CartLine>>,
    batch: Vec<CartLine>,
) -> CoreResult<Vec<CartLine>> {
    match existing {
        Some(mut lines) if !lines.is_empty() && !batch.is_empty() => {
            for incoming in &batch {
                if let Some(line) = lines
                    .iter_mut()
                    .find(|line| line.product_code == incoming.product_code)
                {
                    line.absorb(incoming)?;
                }
            }
            Ok(lines)
        }
        _ => Ok(batch),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
