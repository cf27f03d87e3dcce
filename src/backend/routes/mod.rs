//! Route Configuration Module
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - `/api/auth/*` endpoints
//!
//! # Route Table
//!
//! | Method | Path                | Auth          |
//! |--------|---------------------|---------------|
//! | GET    | `/health`           | none          |
//! | POST   | `/api/auth/signup`  | none          |
//! | POST   | `/api/auth/signin`  | none          |
//! | POST   | `/api/auth/refresh` | refresh token |
//! | POST   | `/api/auth/logout`  | access token  |
//! | GET    | `/api/auth/me`      | access token  |

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
