//! # Cart Error Types
//!
//! Every supported input is normalized, so the aggregator has two failure
//! domains: the cache it depends on, and amounts too large for a decimal.
//! Both are handed to the caller untouched (no retry, no fallback).

use thiserror::Error;
use till_cache::CacheError;
use till_core::CoreError;

/// Errors returned by [`crate::CartAggregator`].
#[derive(Debug, Error)]
pub enum CartError {
    /// The cache could not be read or written.
    #[error("Cart cache unavailable: {0}")]
    Cache(#[from] CacheError),

    /// Cart arithmetic failed, e.g. a line total overflowed.
    #[error("Cart calculation failed: {0}")]
    Calculation(#[from] CoreError),
}

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let err: CartError = CoreError::AmountOverflow {
            operation: "subtotal",
        }
        .into();

        assert!(matches!(err, CartError::Calculation(_)));
        assert_eq!(
            err.to_string(),
            "Cart calculation failed: Amount overflow while computing subtotal"
        );
    }
}
