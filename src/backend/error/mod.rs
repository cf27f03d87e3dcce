//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and how it
//! becomes an HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Status Mapping
//!
//! | Error                                   | Status |
//! |-----------------------------------------|--------|
//! | malformed body, validation failure      | 400    |
//! | missing bearer, any token/credential failure | 401 |
//! | email already registered                | 409    |
//! | credential store unavailable            | 503    |

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
