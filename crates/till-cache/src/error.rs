//! # Cache Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  redis::RedisError / serde_json::Error                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CacheError (this module) ← Adds categorization                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartError::Cache (till-cart) ← Propagated untouched                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A miss, an expired entry or a value of the wrong type is NOT an error;
//! those are `Ok(None)`. Only the storage layer failing produces a `CacheError`.

use redis::ErrorKind;
use thiserror::Error;

/// Cache operation errors.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The backing store could not be reached.
    ///
    /// ## When This Occurs
    /// - Redis refused the connection or timed out
    /// - The connection dropped mid-command
    /// - The configured URL is malformed
    #[error("Cache connection failed: {0}")]
    Connection(String),

    /// A value could not be encoded for storage.
    #[error("Cache serialization failed: {0}")]
    Serialization(String),

    /// The store accepted the connection but the command failed.
    #[error("Cache operation failed: {0}")]
    Operation(String),
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        let unreachable = err.is_io_error()
            || err.is_connection_refusal()
            || err.is_connection_dropped()
            || err.is_timeout()
            || err.kind() == ErrorKind::InvalidClientConfig;

        if unreachable {
            CacheError::Connection(err.to_string())
        } else {
            CacheError::Operation(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with CacheError.
pub type CacheResult<T> = Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_connection() {
        let err = redis::RedisError::from((ErrorKind::IoError, "connection reset"));
        assert!(matches!(CacheError::from(err), CacheError::Connection(_)));
    }

    #[test]
    fn test_response_error_is_operation() {
        let err = redis::RedisError::from((ErrorKind::ResponseError, "WRONGTYPE"));
        assert!(matches!(CacheError::from(err), CacheError::Operation(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = CacheError::Connection("refused".to_string());
        assert_eq!(err.to_string(), "Cache connection failed: refused");
    }
}
