//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Access-token middleware and the bearer-token extractors

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser, RefreshBearer};
