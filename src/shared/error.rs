//! Shared Error Types
//!
//! This module defines the errors produced while checking the shape of
//! incoming requests, before any business rule runs.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field failed a format or length rule
//! - `MalformedBody` - The request body could not be parsed at all
//!
//! # Usage
//!
//! ```rust
//! use sessiongate::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Invalid email format");
//! ```
//!
//! Messages are client-safe: they name the field and the rule, never the
//! submitted value.
use thiserror::Error;

/// Errors raised by request-shape validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The body was missing, not JSON, or had the wrong shape
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new malformed-body error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }
}
