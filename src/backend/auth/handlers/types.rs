/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the auth handlers. JSON field
 * names are camelCase.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::tokens::TokenPair;
use crate::backend::auth::users::User;
use crate::shared::error::SharedError;
use crate::shared::validation::validate_credentials;

/// Signup and signin request
#[derive(Deserialize)]
pub struct AuthRequest {
    /// User's email address
    pub email: String,
    /// Plaintext password; never logged
    pub password: String,
}

impl AuthRequest {
    /// Check the request shape before it reaches the session manager.
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_credentials(&self.email, &self.password)
    }
}

impl std::fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Token pair response
///
/// Returned by signup, signin and refresh.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
    pub token_type: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
            token_type: "Bearer".to_string(),
        }
    }
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
        }
    }
}
