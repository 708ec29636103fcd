//! # Domain Types
//!
//! Input-side domain types used throughout Till.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │    CartLine     │   │      Cart       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product_code   │──►│  product_code   │──►│  customer_id    │       │
//! │  │  quantity       │   │  quantity       │   │  lines          │       │
//! │  │  unit_price     │   │  line_total     │   │  tax_amount     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │     (this module)          (cart module)        (cart module)           │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    TaxRate      │                                                    │
//! │  │  bps (u32)      │  1250 = 12.5%                                      │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::money::Money;
use crate::validation::{validate_product_code, validate_unit_price};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1250 bps = 12.5% (the flat sales-tax rate)
///
/// Storing an integer keeps the rate `Copy`, `Eq` and usable in `const`s;
/// [`TaxRate::percentage`] turns it back into an exact decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact percentage (`12.50` for 1250 bps).
    #[inline]
    pub fn percentage(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }

    /// Returns the rate as an exact fraction (`0.1250` for 1250 bps).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One purchased product entry, as supplied by the caller.
///
/// Transient: line items are consolidated into [`crate::cart::CartLine`]s and
/// never stored themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Business identifier of the product (e.g. `DoveSoap`).
    pub product_code: String,

    /// Number of units purchased.
    pub quantity: u32,

    /// Price of a single unit. May carry more than two decimal places.
    pub unit_price: Money,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(product_code: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        LineItem {
            product_code: product_code.into(),
            quantity,
            unit_price,
        }
    }
}

/// Parses the compact `CODE:QTY:PRICE` form used on the command line.
///
/// ## Example
/// ```rust
/// use till_core::{LineItem, Money};
///
/// let item: LineItem = "DoveSoap:5:39.99".parse().unwrap();
/// assert_eq!(item, LineItem::new("DoveSoap", 5, Money::from_cents(3999)));
/// ```
impl FromStr for LineItem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidLineItem {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.split(':');
        let (Some(code), Some(qty), Some(price), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected CODE:QTY:PRICE"));
        };

        let code = code.trim();
        validate_product_code(code)?;

        let quantity: u32 = qty
            .trim()
            .parse()
            .map_err(|_| invalid("quantity must be a non-negative integer"))?;

        let unit_price: Money = price.parse()?;
        validate_unit_price(unit_price)?;

        Ok(LineItem::new(code, quantity, unit_price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_tax_rate_percentage() {
        let rate = TaxRate::from_bps(1250);
        assert_eq!(rate.bps(), 1250);
        assert_eq!(rate.percentage(), Decimal::new(125, 1));
        assert_eq!(rate.fraction(), Decimal::new(125, 3));
        assert!(!rate.is_zero());
        assert!(TaxRate::default().is_zero());
    }

    #[test]
    fn test_parse_line_item() {
        let item: LineItem = " AxeDeos : 2 : 99.99 ".parse().unwrap();
        assert_eq!(item.product_code, "AxeDeos");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, Money::from_cents(9999));
    }

    #[test]
    fn test_parse_line_item_keeps_fine_prices() {
        let item: LineItem = "DoveSoap:1:0.5649".parse().unwrap();
        assert_eq!(item.unit_price, "0.5649".parse::<Money>().unwrap());
    }

    #[test]
    fn test_parse_line_item_wrong_shape() {
        for input in ["DoveSoap", "DoveSoap:1", "DoveSoap:1:2:3"] {
            let err = input.parse::<LineItem>().unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidLineItem { .. }),
                "expected InvalidLineItem for {input}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_line_item_bad_quantity() {
        let err = "DoveSoap:-1:39.99".parse::<LineItem>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidLineItem { .. }));
    }

    #[test]
    fn test_parse_line_item_negative_price() {
        let err = "DoveSoap:1:-39.99".parse::<LineItem>().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustNotBeNegative { .. })
        ));
    }

    #[test]
    fn test_line_item_json_is_camel_case() {
        let json = r#"{"productCode":"DoveSoap","quantity":2,"unitPrice":"39.99"}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item, LineItem::new("DoveSoap", 2, Money::from_cents(3999)));
    }
}
