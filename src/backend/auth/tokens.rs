/**
 * Token Codec
 *
 * Issues and verifies the two JWTs of a session:
 *
 * - **Access token** - short-lived, signed with `AT_SECRET`, presented on
 *   protected routes. Never stored, never individually revocable.
 * - **Refresh token** - long-lived, signed with `RT_SECRET`, exchanged for
 *   a new pair. Only its SHA-256 digest is persisted.
 *
 * Both use HS256 with zero leeway so a token is rejected the second its
 * `exp` passes. Every token carries a random `jti`, which keeps two tokens
 * issued in the same second distinct.
 */

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::config::AppConfig;

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, wrong secret, malformed, or missing claims
    #[error("invalid token: {0}")]
    Invalid(String),

    #[error("token has expired")]
    Expired,

    #[error("failed to sign token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    /// `iat + ttl` does not fit in a Unix timestamp
    #[error("token expiry overflows")]
    ExpiryOverflow,
}

/// Claims embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject - user ID
    pub sub: Uuid,
    pub email: String,
    /// Issued-at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    pub jti: Uuid,
}

/// Claims embedded in every refresh token.
///
/// Verifying these proves only that the token was signed by us and is
/// unexpired; the session manager additionally compares the token's
/// digest with the one stored for the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    pub sub: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: Uuid,
}

/// A freshly issued access/refresh pair.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Verification capability for one kind of token.
///
/// Routes pick the verifier they need (access for protected routes,
/// refresh for the rotation endpoint) instead of branching on a kind flag.
pub trait TokenVerifier: Send + Sync {
    type Claims;

    fn verify(&self, token: &str) -> Result<Self::Claims, TokenError>;
}

/// Verifies access tokens against `AT_SECRET`.
#[derive(Clone)]
pub struct AccessTokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

/// Verifies refresh tokens against `RT_SECRET`.
#[derive(Clone)]
pub struct RefreshTokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier for AccessTokenVerifier {
    type Claims = AccessTokenClaims;

    fn verify(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        decode_claims(token, &self.key, &self.validation)
    }
}

impl TokenVerifier for RefreshTokenVerifier {
    type Claims = RefreshTokenClaims;

    fn verify(&self, token: &str) -> Result<RefreshTokenClaims, TokenError> {
        decode_claims(token, &self.key, &self.validation)
    }
}

/// Signs and verifies access and refresh tokens.
#[derive(Clone)]
pub struct TokenCodec {
    access_key: EncodingKey,
    refresh_key: EncodingKey,
    access_ttl_secs: u64,
    refresh_ttl_secs: u64,
    access: AccessTokenVerifier,
    refresh: RefreshTokenVerifier,
}

impl TokenCodec {
    pub fn new(config: &AppConfig) -> Self {
        let access_secret = config.access_token_secret.expose_secret().as_bytes();
        let refresh_secret = config.refresh_token_secret.expose_secret().as_bytes();

        Self {
            access_key: EncodingKey::from_secret(access_secret),
            refresh_key: EncodingKey::from_secret(refresh_secret),
            access_ttl_secs: config.access_token_ttl_secs,
            refresh_ttl_secs: config.refresh_token_ttl_secs,
            access: AccessTokenVerifier {
                key: DecodingKey::from_secret(access_secret),
                validation: validation(),
            },
            refresh: RefreshTokenVerifier {
                key: DecodingKey::from_secret(refresh_secret),
                validation: validation(),
            },
        }
    }

    pub fn access_verifier(&self) -> &AccessTokenVerifier {
        &self.access
    }

    pub fn issue_access_token(&self, subject: Uuid, email: &str) -> Result<String, TokenError> {
        self.issue_access_token_at(subject, email, Utc::now().timestamp())
    }

    pub fn issue_refresh_token(&self, subject: Uuid, email: &str) -> Result<String, TokenError> {
        self.issue_refresh_token_at(subject, email, Utc::now().timestamp())
    }

    /// Issue both tokens for `subject`.
    pub fn issue_pair(&self, subject: Uuid, email: &str) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.issue_access_token(subject, email)?,
            refresh_token: self.issue_refresh_token(subject, email)?,
            expires_in: self.access_ttl_secs,
        })
    }

    pub fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        self.access.verify(token)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshTokenClaims, TokenError> {
        self.refresh.verify(token)
    }

    fn issue_access_token_at(
        &self,
        subject: Uuid,
        email: &str,
        issued_at: i64,
    ) -> Result<String, TokenError> {
        let claims = AccessTokenClaims {
            sub: subject,
            email: email.to_string(),
            iat: issued_at,
            exp: expiry(issued_at, self.access_ttl_secs)?,
            jti: Uuid::new_v4(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.access_key).map_err(TokenError::Encode)
    }

    fn issue_refresh_token_at(
        &self,
        subject: Uuid,
        email: &str,
        issued_at: i64,
    ) -> Result<String, TokenError> {
        let claims = RefreshTokenClaims {
            sub: subject,
            email: email.to_string(),
            iat: issued_at,
            exp: expiry(issued_at, self.refresh_ttl_secs)?,
            jti: Uuid::new_v4(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.refresh_key).map_err(TokenError::Encode)
    }
}

/// SHA-256 hash of a raw refresh token, hex-encoded.
///
/// This is the value stored as `users.refresh_token_hash`.
pub fn hash_refresh_token(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}

fn validation() -> Validation {
    let mut validation = Validation::new(ALGORITHM);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["sub", "exp", "iat"]);
    validation
}

fn expiry(issued_at: i64, ttl_secs: u64) -> Result<i64, TokenError> {
    i64::try_from(ttl_secs)
        .ok()
        .and_then(|ttl| issued_at.checked_add(ttl))
        .ok_or(TokenError::ExpiryOverflow)
}

fn decode_claims<C: DeserializeOwned>(
    token: &str,
    key: &DecodingKey,
    validation: &Validation,
) -> Result<C, TokenError> {
    decode::<C>(token, key, validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e.to_string()),
        })
}
