//! Session manager errors
//!
//! Every variant except `Unavailable` is a normal outcome the client can
//! recover from by signing in again. `Unavailable` wraps infrastructure
//! failures; its detail is for server logs only.

use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::store::StoreError;
use crate::backend::auth::tokens::TokenError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email already registered")]
    EmailTaken,

    /// Unknown email and wrong password are deliberately the same variant
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("token has expired")]
    TokenExpired,

    #[error("no active session")]
    SessionNotFound,

    /// A refresh token that is no longer current was presented
    #[error("refresh token does not match the active session")]
    TokenMismatch,

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    pub fn unavailable(detail: impl std::fmt::Display) -> Self {
        Self::Unavailable(detail.to_string())
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => Self::EmailTaken,
            other => Self::unavailable(other),
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid(reason) => Self::TokenInvalid(reason),
            TokenError::Expired => Self::TokenExpired,
            TokenError::Encode(e) => Self::unavailable(format!("token signing failed: {e}")),
            TokenError::ExpiryOverflow => Self::unavailable(TokenError::ExpiryOverflow),
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        Self::unavailable(err)
    }
}
