/**
 * Refresh Handler
 *
 * POST /api/auth/refresh with `Authorization: Bearer <refreshToken>`
 *
 * Rotates the session: the presented refresh token becomes unusable and
 * a new pair is returned. Presenting an already-rotated token revokes the
 * session.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::TokenResponse;
use crate::backend::auth::store::CredentialStore;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::RefreshBearer;
use crate::backend::server::state::AppState;

/// Refresh handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing header, invalid or expired token, no
///   active session, or a stale token
/// * `503 Service Unavailable` - Credential store unreachable
pub async fn refresh<S: CredentialStore>(
    State(state): State<AppState<S>>,
    RefreshBearer(token): RefreshBearer,
) -> Result<Json<TokenResponse>, BackendError> {
    let pair = state.auth.refresh(&token).await?;

    Ok(Json(pair.into()))
}
