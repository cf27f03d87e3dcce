//! sessiongate - Main Library
//!
//! An authentication backend: signup, signin, logout and refresh-token
//! rotation over JWT access/refresh pairs.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration, request validation and their errors.
//!   Compiles without the server stack.
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - bcrypt password hashing
//!   - JWT issuance and verification with distinct access/refresh secrets
//!   - Session/rotation manager with replay detection
//!   - PostgreSQL and in-memory credential stores
//!   - Axum routes, middleware and error mapping
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend module and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use sessiongate::backend::server::init::create_app;
//! use sessiongate::shared::config::AppConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
