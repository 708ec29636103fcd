//! # Tax Calculation
//!
//! Flat-rate sales tax. Rounding is the caller's job: the cart rounds the
//! final tax amount to two places, nothing here does.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::TaxRate;

/// Computes `amount × rate / 100` with no rounding.
///
/// Negative amounts are not rejected; the result is simply negative.
/// The rate is applied as a fraction, so the intermediate never exceeds
/// the result for rates up to 100%.
///
/// ## Example
/// ```rust
/// use till_core::{calculate_tax, Money, TaxRate};
///
/// let tax = calculate_tax(Money::from_cents(27996), TaxRate::from_bps(1250)).unwrap();
/// assert_eq!(tax, "34.995".parse().unwrap());
/// ```
pub fn calculate_tax(amount: Money, rate: TaxRate) -> CoreResult<Money> {
    amount
        .amount()
        .checked_mul(rate.fraction())
        .map(Money::new)
        .ok_or(CoreError::AmountOverflow {
            operation: "sales tax",
        })
}

/// Strategy for turning a subtotal into a tax amount.
///
/// The aggregator receives one of these by injection so tests and other
/// deployments can substitute their own rule.
pub trait TaxCalculator: Send + Sync {
    /// Returns the unrounded tax for `amount` at `rate`.
    fn calculate_tax(&self, amount: Money, rate: TaxRate) -> CoreResult<Money>;
}

/// The default flat percentage calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentageTaxCalculator;

impl TaxCalculator for PercentageTaxCalculator {
    fn calculate_tax(&self, amount: Money, rate: TaxRate) -> CoreResult<Money> {
        calculate_tax(amount, rate)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_calculate_tax_is_unrounded() {
        let tax = calculate_tax(Money::from_cents(27996), TaxRate::from_bps(1250)).unwrap();
        assert_eq!(tax, "34.995".parse::<Money>().unwrap());
    }

    #[test]
    fn test_calculate_tax_basic() {
        // 100.00 at 10% = 10.00
        let tax = calculate_tax(Money::from_cents(10000), TaxRate::from_bps(1000)).unwrap();
        assert_eq!(tax, Money::from_cents(1000));
    }

    #[test]
    fn test_calculate_tax_zero_rate() {
        let tax = calculate_tax(Money::from_cents(3999), TaxRate::zero()).unwrap();
        assert!(tax.is_zero());
    }

    #[test]
    fn test_calculate_tax_negative_passes_through() {
        let tax = calculate_tax(Money::from_cents(-1000), TaxRate::from_bps(1250)).unwrap();
        assert_eq!(tax, Money::from_cents(-125));
    }

    #[test]
    fn test_percentage_calculator_delegates() {
        let calculator = PercentageTaxCalculator;
        let rate = TaxRate::from_bps(1250);
        let amount = Money::from_cents(7998);
        assert_eq!(
            calculator.calculate_tax(amount, rate).unwrap(),
            calculate_tax(amount, rate).unwrap()
        );
    }

    #[test]
    fn test_calculate_tax_near_decimal_max() {
        // 12.5% of the largest decimal still fits
        let max = Money::new(Decimal::MAX);
        assert!(calculate_tax(max, TaxRate::from_bps(1250)).is_ok());

        // A rate above 100% pushes it out of range
        let err = calculate_tax(max, TaxRate::from_bps(20000)).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));
    }
}
