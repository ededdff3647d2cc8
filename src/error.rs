//! Custom error types for the wallet
//!
//! A single error enum covers validation, lookup, and persistence failures so
//! the interactive menu can decide how to report each one.

use thiserror::Error;

/// The main error type for wallet operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for records and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Interactive input reached end of stream
    #[error("Input closed")]
    InputClosed,
}

impl WalletError {
    /// Create a "not found" error for a transaction index
    pub fn transaction_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: format!("index {}", index),
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

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WalletError::Validation("bad date".into());
        assert_eq!(err.to_string(), "Validation error: bad date");
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = WalletError::transaction_not_found(7);
        assert_eq!(err.to_string(), "Transaction not found: index 7");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: WalletError = io_err.into();
        assert!(matches!(err, WalletError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: WalletError = json_err.into();
        assert!(matches!(err, WalletError::Json(_)));
    }
}
