/**
 * Signin Handler
 *
 * POST /api/auth/signin
 *
 * An unknown email and a wrong password produce the same 401 body, so
 * the endpoint cannot be used to probe for accounts.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthRequest, TokenResponse};
use crate::backend::auth::store::CredentialStore;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Sign in handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or invalid shape
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `503 Service Unavailable` - Credential store unreachable
pub async fn signin<S: CredentialStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let pair = state.auth.signin(&request.email, &request.password).await?;

    Ok(Json(pair.into()))
}
