/**
 * Logout Handler
 *
 * POST /api/auth/logout with `Authorization: Bearer <accessToken>`
 *
 * Clears the caller's refresh token. Outstanding access tokens stay valid
 * until they expire.
 */

use axum::{extract::State, http::StatusCode};

use crate::backend::auth::store::CredentialStore;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;

/// Logout handler
///
/// Returns `204 No Content`, including when the session had already ended.
pub async fn logout<S: CredentialStore>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
) -> Result<StatusCode, BackendError> {
    state.auth.logout(user.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
