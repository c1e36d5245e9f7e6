//! Error types for the rolodex crate.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on an address book.
///
/// These are the only two error kinds the core produces; both are
/// recoverable and are rendered as user-facing messages at the command
/// boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Malformed name, phone number, or birthday input
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Lookup by contact name or phone value failed
    #[error("{0} not found")]
    NotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
