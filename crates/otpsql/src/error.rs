//! Error types for otpsql

use crate::dialect::Dialect;
use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error types for passcode store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database handle reports a dialect no statement can be generated for.
    ///
    /// Raised before anything is sent to the database.
    #[error("unsupported database dialect: {0}")]
    Unsupported(Dialect),

    /// Database connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Query execution error, propagated from the backend driver
    #[error("query error: {0}")]
    Query(Box<dyn std::error::Error + Send + Sync>),

    /// Row decode/mapping error
    #[error("decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Invalid identifier or placeholder/parameter mismatch
    #[error("validation error: {0}")]
    Validation(String),

    /// Pool error
    #[cfg(feature = "pool")]
    #[error("pool error: {0}")]
    Pool(String),
}

impl StoreError {
    /// Create a query error from any backend driver error, keeping the source intact
    pub fn query(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Query(err.into())
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is an unsupported-dialect error
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }

    /// Check if this is a decode error
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
