/**
 * Get Current User Handler
 *
 * GET /api/auth/me
 *
 * Returns the account behind a valid access token, without sensitive
 * fields.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::store::CredentialStore;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Token missing, invalid, expired, or the account
///   no longer exists
/// * `503 Service Unavailable` - Credential store unreachable
pub async fn get_me<S: CredentialStore>(
    State(state): State<AppState<S>>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = state.auth.current_user(user.user_id).await?;

    Ok(Json(user.into()))
}
