//! Authentication Handlers Module
//!
//! HTTP handlers for the auth endpoints. Each handler validates the request
//! shape, calls one session manager operation and maps the result.
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - create account, 201 + token pair
//! - **`signin`** - POST /api/auth/signin - token pair
//! - **`refresh`** - POST /api/auth/refresh - rotate, new token pair
//! - **`logout`** - POST /api/auth/logout - 204
//! - **`get_me`** - GET /api/auth/me - current user

/// Request and response types
pub mod types;

pub mod signup;

pub mod signin;

pub mod refresh;

pub mod logout;

pub mod me;

pub use types::{AuthRequest, TokenResponse, UserResponse};

pub use logout::logout;
pub use me::get_me;
pub use refresh::refresh;
pub use signin::signin;
pub use signup::signup;
