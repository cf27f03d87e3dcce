/**
 * Signup Handler
 *
 * POST /api/auth/signup
 *
 * # Registration Process
 *
 * 1. Validate email format and password bounds
 * 2. Create the user (email compared case-insensitively)
 * 3. Start a session and return the token pair
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthRequest, TokenResponse};
use crate::backend::auth::store::CredentialStore;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, invalid email, empty or oversized password
/// * `409 Conflict` - Email already registered
/// * `503 Service Unavailable` - Credential store unreachable
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "user@example.com", "password": "correct horse" }
/// ```
///
/// # Example Response (201)
///
/// ```json
/// {
///   "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "refreshToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "expiresIn": 900,
///   "tokenType": "Bearer"
/// }
/// ```
pub async fn signup<S: CredentialStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TokenResponse>), BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let pair = state.auth.signup(&request.email, &request.password).await?;

    Ok((StatusCode::CREATED, Json(pair.into())))
}
