//! Backend Module
//!
//! Server-side code: the auth core and the Axum HTTP surface around it.
//! Only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`auth`** - Password hashing, JWT codec, credential stores, session
//!   manager and HTTP handlers
//! - **`middleware`** - Access-token middleware and bearer extractors
//! - **`routes`** - Route configuration and router assembly
//! - **`server`** - Application state, database loading, app creation
//! - **`error`** - Backend error type and HTTP response mapping
//!
//! # Data Flow
//!
//! ```text
//! handler -> AuthService -> { PasswordHasher, TokenCodec, CredentialStore }
//! ```
//!
//! Handlers validate request shape, the `AuthService` enforces business
//! rules, and `BackendError` turns every outcome into a status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and session management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use server::{create_app, create_app_with_store, AppState};
