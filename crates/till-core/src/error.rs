//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                           │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  till-cache errors (separate crate)                                     │
//! │  └── CacheError       - Storage-layer failures                          │
//! │                                                                         │
//! │  till-cart errors (separate crate)                                      │
//! │  └── CartError        - What callers of add_products see                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Empty and absent inputs are normalized, not rejected. The cart math only
//! fails when an amount overflows the decimal range; everything else here
//! comes out of the parsing helpers that turn adapter input
//! (`CODE:QTY:PRICE`) into domain types.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A textual line item could not be understood.
    ///
    /// ## When This Occurs
    /// - Wrong number of `:`-separated fields (`DoveSoap:1`)
    /// - Quantity is not a non-negative integer
    #[error("Invalid line item '{input}': {reason}")]
    InvalidLineItem { input: String, reason: String },

    /// An amount no longer fits in a decimal.
    ///
    /// ## When This Occurs
    /// - `unit_price × quantity` for a very large price
    /// - Accumulated line totals, subtotal, or subtotal plus tax
    #[error("Amount overflow while computing {operation}")]
    AmountOverflow { operation: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., unparsable decimal).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidLineItem {
            input: "DoveSoap:1".to_string(),
            reason: "expected CODE:QTY:PRICE".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid line item 'DoveSoap:1': expected CODE:QTY:PRICE"
        );

        let err = CoreError::AmountOverflow {
            operation: "subtotal",
        };
        assert_eq!(err.to_string(), "Amount overflow while computing subtotal");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "product_code".to_string(),
        };
        assert_eq!(err.to_string(), "product_code is required");

        let err = ValidationError::MustNotBeNegative {
            field: "unit_price".to_string(),
        };
        assert_eq!(err.to_string(), "unit_price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "product_code".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
