//! # Validation Module
//!
//! Input validation for values entering the system through an adapter
//! (command line, request bodies).
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Adapter parsing (THIS MODULE)                                 │
//! │  ├── "DoveSoap:2:39.99" → LineItem                                      │
//! │  └── Rejects malformed text early                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart Aggregator                                               │
//! │  └── Accepts every LineItem as-is (empty lists are normalized)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a product code.
pub const MAX_PRODUCT_CODE_LEN: usize = 50;

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Letters, numbers, hyphens and underscores only
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_product_code;
///
/// assert!(validate_product_code("DoveSoap").is_ok());
/// assert!(validate_product_code("").is_err());
/// assert!(validate_product_code("Dove Soap").is_err());
/// ```
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "product_code".to_string(),
        });
    }

    if code.len() > MAX_PRODUCT_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "product_code".to_string(),
            max: MAX_PRODUCT_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "product_code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit_price".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_code() {
        assert!(validate_product_code("DoveSoap").is_ok());
        assert!(validate_product_code("AXE-DEOS_150").is_ok());

        assert!(matches!(
            validate_product_code("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_code(&"A".repeat(51)),
            Err(ValidationError::TooLong { max: 50, .. })
        ));
        assert!(matches!(
            validate_product_code("Dove:Soap"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_cents(3999)).is_ok());
        assert!(matches!(
            validate_unit_price(Money::from_cents(-1)),
            Err(ValidationError::MustNotBeNegative { .. })
        ));
    }
}
