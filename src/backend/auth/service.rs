/**
 * Session / Rotation Manager
 *
 * Owns the per-user session state machine:
 *
 * ```text
 * NoSession --signup/signin--> Active --refresh--> Active (rotated)
 *     ^                          |
 *     +------logout / replay-----+
 * ```
 *
 * A user has at most one active refresh token. Its SHA-256 digest is the
 * only thing persisted. Every refresh replaces the digest through a
 * compare-and-set at the store, so a rotated-out token can never be
 * exchanged again.
 *
 * Presenting a stale refresh token is treated as theft: the session is
 * revoked and both the thief and the legitimate client must sign in again.
 * The same applies to the loser of two concurrent refreshes.
 *
 * Callers validate request shapes first. The manager only enforces
 * business rules.
 */

use std::future::Future;
use std::time::Duration;

use tracing::instrument;
use uuid::Uuid;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::store::{CredentialStore, NewUser, StoreError};
use crate::backend::auth::tokens::{hash_refresh_token, TokenCodec, TokenPair};
use crate::backend::auth::users::User;
use crate::shared::config::AppConfig;

/// Session manager over a credential store
pub struct AuthService<S> {
    store: S,
    hasher: PasswordHasher,
    codec: TokenCodec,
    store_timeout: Duration,
}

impl<S: CredentialStore> AuthService<S> {
    pub fn new(store: S, hasher: PasswordHasher, codec: TokenCodec, store_timeout: Duration) -> Self {
        Self {
            store,
            hasher,
            codec,
            store_timeout,
        }
    }

    /// Build the hasher and codec from configuration.
    pub fn from_config(store: S, config: &AppConfig) -> Result<Self, AuthError> {
        let hasher = PasswordHasher::new(config.bcrypt_cost)?;
        let codec = TokenCodec::new(config);

        Ok(Self::new(store, hasher, codec, config.store_timeout))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Create an account and sign it in.
    #[instrument(skip(self, password))]
    pub async fn signup(&self, email: &str, password: &str) -> Result<TokenPair, AuthError> {
        let email = normalize_email(email);

        if self.with_deadline("find_by_email", self.store.find_by_email(&email)).await?.is_some() {
            tracing::info!("Signup rejected, email already registered");
            return Err(AuthError::EmailTaken);
        }

        let password_hash = self.hash_password(password).await?;

        // The account and its first session land in one insert.
        let id = Uuid::new_v4();
        let pair = self.codec.issue_pair(id, &email)?;

        // The unique index still guards against a concurrent signup.
        let user = self
            .with_deadline(
                "create_user",
                self.store.create_user(NewUser {
                    id,
                    email,
                    password_hash,
                    refresh_token_hash: Some(hash_refresh_token(&pair.refresh_token)),
                }),
            )
            .await?;

        tracing::info!(user_id = %user.id, "User signed up");

        Ok(pair)
    }

    /// Check credentials and start a new session, replacing any existing one.
    #[instrument(skip(self, password))]
    pub async fn signin(&self, email: &str, password: &str) -> Result<TokenPair, AuthError> {
        let email = normalize_email(email);

        let Some(user) = self.with_deadline("find_by_email", self.store.find_by_email(&email)).await?
        else {
            self.burn_dummy_verify(password).await;
            tracing::info!("Signin failed");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.verify_password(password, &user.password_hash).await? {
            tracing::info!(user_id = %user.id, "Signin failed");
            return Err(AuthError::InvalidCredentials);
        }

        let pair = self.start_session(&user).await?;
        tracing::info!(user_id = %user.id, "User signed in");

        Ok(pair)
    }

    /// Exchange a refresh token for a new pair, invalidating the old token.
    #[instrument(skip_all)]
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.codec.verify_refresh_token(refresh_token)?;

        let user = self
            .with_deadline("find_by_id", self.store.find_by_id(claims.sub))
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        let Some(stored_hash) = user.refresh_token_hash.as_deref() else {
            return Err(AuthError::SessionNotFound);
        };

        let presented_hash = hash_refresh_token(refresh_token);
        if presented_hash != stored_hash {
            tracing::warn!(user_id = %user.id, "Stale refresh token presented, revoking session");
            self.revoke(user.id).await?;
            return Err(AuthError::TokenMismatch);
        }

        let pair = self.codec.issue_pair(user.id, &user.email)?;
        let new_hash = hash_refresh_token(&pair.refresh_token);

        let swapped = self
            .with_deadline(
                "swap_refresh_hash",
                self.store
                    .swap_refresh_hash(user.id, &presented_hash, &new_hash),
            )
            .await?;

        if !swapped {
            tracing::warn!(user_id = %user.id, "Concurrent refresh detected, revoking session");
            self.revoke(user.id).await?;
            return Err(AuthError::TokenMismatch);
        }

        tracing::debug!(user_id = %user.id, "Refresh token rotated");

        Ok(pair)
    }

    /// End the user's session. Succeeds whether or not one exists.
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: Uuid) -> Result<(), AuthError> {
        self.revoke(user_id).await?;
        tracing::info!(%user_id, "User logged out");
        Ok(())
    }

    /// Fetch the user behind an already-verified access token.
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: Uuid) -> Result<User, AuthError> {
        self.with_deadline("find_by_id", self.store.find_by_id(user_id))
            .await?
            .ok_or(AuthError::SessionNotFound)
    }

    async fn start_session(&self, user: &User) -> Result<TokenPair, AuthError> {
        let pair = self.codec.issue_pair(user.id, &user.email)?;
        let hash = hash_refresh_token(&pair.refresh_token);

        self.with_deadline(
            "set_refresh_hash",
            self.store.set_refresh_hash(user.id, Some(&hash)),
        )
        .await?;

        Ok(pair)
    }

    async fn revoke(&self, user_id: Uuid) -> Result<(), AuthError> {
        self.with_deadline("set_refresh_hash", self.store.set_refresh_hash(user_id, None))
            .await
    }

    async fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(AuthError::unavailable)?
            .map_err(AuthError::from)
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(AuthError::unavailable)?
            .map_err(AuthError::from)
    }

    async fn burn_dummy_verify(&self, password: &str) {
        let hasher = self.hasher.clone();
        let password = password.to_string();

        if let Err(e) = tokio::task::spawn_blocking(move || hasher.verify_dummy(&password)).await {
            tracing::error!("Dummy password verification task failed: {e}");
        }
    }

    async fn with_deadline<T, F>(&self, operation: &'static str, call: F) -> Result<T, AuthError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        let result = tokio::time::timeout(self.store_timeout, call)
            .await
            .unwrap_or_else(|_| {
                Err(StoreError::Unavailable(format!(
                    "{operation} timed out after {:?}",
                    self.store_timeout
                )))
            });

        result.map_err(|e| {
            if !matches!(e, StoreError::Conflict) {
                tracing::error!(operation, "Credential store call failed: {e}");
            }
            AuthError::from(e)
        })
    }
}

/// Canonical form used for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
