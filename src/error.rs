//! Custom error types for AhorrApp
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. The query and report functions are
//! total and never produce errors; only configuration, the store, and the
//! service layer report through these types.

use thiserror::Error;

/// The main error type for AhorrApp operations
#[derive(Error, Debug)]
pub enum AhorrError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Expense larger than the wallet's running balance
    #[error("Insufficient funds in wallet '{wallet}': need {needed}, have {available}")]
    InsufficientFunds {
        wallet: String,
        needed: i64,
        available: i64,
    },

    /// In-memory store errors (poisoned locks)
    #[error("Store error: {0}")]
    Store(String),
}

impl AhorrError {
    /// Create a "not found" error for wallets
    pub fn wallet_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Wallet",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AhorrError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AhorrError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for AhorrApp operations
pub type AhorrResult<T> = Result<T, AhorrError>;
