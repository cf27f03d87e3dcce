/**
 * Backend Error Types
 *
 * The single error type returned by HTTP handlers and extractors.
 *
 * # Error Categories
 *
 * - `Auth` - Session manager outcomes (credentials, tokens, sessions,
 *   store availability)
 * - `Validation` - The request body failed a shape check or was not JSON
 * - `MissingBearer` - A route needing a bearer token got none
 *
 * # Client Safety
 *
 * [`BackendError::message`] is what the client sees. It never includes
 * token contents, decoder diagnostics or store errors; those go to the
 * server log only.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::error::AuthError;
use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] SharedError),

    /// No `Authorization: Bearer <token>` header, or an unusable one
    #[error("missing bearer token")]
    MissingBearer,
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(SharedError::malformed(rejection.body_text()))
    }
}

impl BackendError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(err) => match err {
                AuthError::EmailTaken => StatusCode::CONFLICT,
                AuthError::InvalidCredentials
                | AuthError::TokenInvalid(_)
                | AuthError::TokenExpired
                | AuthError::SessionNotFound
                | AuthError::TokenMismatch => StatusCode::UNAUTHORIZED,
                AuthError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MissingBearer => StatusCode::UNAUTHORIZED,
        }
    }

    /// Machine-readable error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::Auth(err) => match err {
                AuthError::EmailTaken => "email_taken",
                AuthError::InvalidCredentials => "invalid_credentials",
                AuthError::TokenInvalid(_) => "token_invalid",
                AuthError::TokenExpired => "token_expired",
                AuthError::SessionNotFound => "session_not_found",
                AuthError::TokenMismatch => "token_mismatch",
                AuthError::Unavailable(_) => "unavailable",
            },
            Self::Validation(SharedError::ValidationError { .. }) => "validation_error",
            Self::Validation(SharedError::MalformedBody { .. }) => "malformed_body",
            Self::MissingBearer => "missing_bearer",
        }
    }

    /// Client-safe error message
    pub fn message(&self) -> String {
        match self {
            Self::Auth(err) => match err {
                AuthError::EmailTaken => "Email already registered",
                AuthError::InvalidCredentials => "Invalid email or password",
                AuthError::TokenInvalid(_) => "Invalid token",
                AuthError::TokenExpired => "Token expired",
                AuthError::SessionNotFound => "No active session",
                AuthError::TokenMismatch => "Refresh token is no longer valid",
                AuthError::Unavailable(_) => "Service temporarily unavailable",
            }
            .to_string(),
            Self::Validation(err) => err.to_string(),
            Self::MissingBearer => "Missing or malformed Authorization header".to_string(),
        }
    }
}
