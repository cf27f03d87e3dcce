/**
 * Credential Store
 *
 * The persistence seam of the auth core. The session manager only ever
 * talks to a [`CredentialStore`]; PostgreSQL and in-memory
 * implementations are provided.
 *
 * # Atomicity
 *
 * `swap_refresh_hash` must be a single compare-and-set at the store. With
 * several server instances sharing one database, in-process locking
 * cannot serialize two refreshes of the same user.
 */

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;

/// Errors raised by a credential store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this email already exists
    #[error("email already registered")]
    Conflict,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Fields needed to create a user
///
/// The id is chosen by the caller so the first refresh token can be
/// issued for it and its hash written in the same insert.
#[derive(Clone)]
pub struct NewUser {
    pub id: Uuid,
    /// Already normalized (trimmed, lowercased)
    pub email: String,
    pub password_hash: String,
    /// Hash of the initial refresh token; `None` creates the user signed out
    pub refresh_token_hash: Option<String>,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("has_session", &self.refresh_token_hash.is_some())
            .finish_non_exhaustive()
    }
}

/// Persistence operations used by the session manager.
pub trait CredentialStore: Send + Sync + 'static {
    /// Insert a user, with its initial session if one is given.
    ///
    /// Fails with [`StoreError::Conflict`] when the email is taken,
    /// compared case-insensitively.
    fn create_user(&self, new_user: NewUser)
        -> impl Future<Output = Result<User, StoreError>> + Send;

    fn find_by_email(&self, email: &str)
        -> impl Future<Output = Result<Option<User>, StoreError>> + Send;

    fn find_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<User>, StoreError>> + Send;

    /// Unconditionally overwrite the refresh hash. `None` ends the session.
    fn set_refresh_hash(
        &self,
        id: Uuid,
        hash: Option<&str>,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Replace the refresh hash only if it currently equals `expected`.
    ///
    /// Returns `true` if the swap happened.
    fn swap_refresh_hash(
        &self,
        id: Uuid,
        expected: &str,
        new_hash: &str,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

/// In-memory credential store.
///
/// Single-process only. Used by tests and for running the server without
/// a database.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    users: Arc<Mutex<HashMap<Uuid, User>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.lock();

        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&new_user.email))
        {
            return Err(StoreError::Conflict);
        }

        if users.contains_key(&new_user.id) {
            return Err(StoreError::Conflict);
        }

        let now = Utc::now();
        let user = User {
            id: new_user.id,
            email: new_user.email,
            password_hash: new_user.password_hash,
            refresh_token_hash: new_user.refresh_token_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .lock()
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.lock().get(&id).cloned())
    }

    async fn set_refresh_hash(&self, id: Uuid, hash: Option<&str>) -> Result<(), StoreError> {
        if let Some(user) = self.lock().get_mut(&id) {
            user.refresh_token_hash = hash.map(str::to_string);
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn swap_refresh_hash(
        &self,
        id: Uuid,
        expected: &str,
        new_hash: &str,
    ) -> Result<bool, StoreError> {
        let mut users = self.lock();
        let Some(user) = users.get_mut(&id) else {
            return Ok(false);
        };

        if user.refresh_token_hash.as_deref() != Some(expected) {
            return Ok(false);
        }

        user.refresh_token_hash = Some(new_hash.to_string());
        user.updated_at = Utc::now();
        Ok(true)
    }
}
