//! Authentication Module
//!
//! Signup, signin, refresh-token rotation and logout.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`tokens`** - JWT access/refresh issuance and verification
//! - **`store`** - Credential store trait and in-memory implementation
//! - **`users`** - User model and PostgreSQL store
//! - **`service`** - Session/rotation manager
//! - **`error`** - Manager error taxonomy
//! - **`handlers`** - HTTP handlers
//!
//! # Session Flow
//!
//! 1. **Signup / Signin**: credentials checked, new token pair issued, the
//!    refresh token's hash stored against the user
//! 2. **Refresh**: refresh token verified and compared with the stored
//!    hash, then atomically swapped for a new one
//! 3. **Logout**: stored hash cleared
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Access and refresh tokens are signed with different secrets
//! - Only a SHA-256 hash of the refresh token is persisted
//! - A rotated-out refresh token revokes the session when presented
//! - Invalid credentials return 401 (no information leakage)

pub mod password;

pub mod tokens;

pub mod store;

pub mod users;

pub mod service;

pub mod error;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use error::AuthError;
pub use handlers::{get_me, logout, refresh, signin, signup};
pub use password::PasswordHasher;
pub use service::AuthService;
pub use store::{CredentialStore, MemoryCredentialStore, NewUser, StoreError};
pub use tokens::{
    hash_refresh_token, AccessTokenClaims, AccessTokenVerifier, RefreshTokenClaims,
    RefreshTokenVerifier, TokenCodec, TokenError, TokenPair, TokenVerifier,
};
pub use users::{PgCredentialStore, User};
