//! Shared Module
//!
//! This module contains types that do not depend on the server runtime:
//! process configuration, request validation rules and the error type
//! those rules produce. Everything here compiles without the `ssr`
//! feature.
//!
//! # Overview
//!
//! - **`config`** - Immutable application configuration loaded once at startup
//! - **`validation`** - Request-shape checks (email format, password bounds)
//! - **`error`** - Validation and request-body errors

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Request-shape validation
pub mod validation;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use validation::{valid_email, validate_credentials, MAX_PASSWORD_BYTES};
