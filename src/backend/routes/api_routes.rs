/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/signin` - User signin
 * - `POST /api/auth/refresh` - Token rotation (refresh token as bearer)
 *
 * ## Access token required
 * - `POST /api/auth/logout` - End the session
 * - `GET /api/auth/me` - Get current user info
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::store::CredentialStore;
use crate::backend::auth::{get_me, logout, refresh, signin, signup};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Protected routes run behind [`auth_middleware`], which needs the state
/// up front to reach the access-token verifier.
pub fn configure_api_routes<S: CredentialStore>(
    router: Router<AppState<S>>,
    state: &AppState<S>,
) -> Router<AppState<S>> {
    let protected = Router::new()
        .route("/api/auth/logout", post(logout::<S>))
        .route("/api/auth/me", get(get_me::<S>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<S>,
        ));

    router
        .route("/api/auth/signup", post(signup::<S>))
        .route("/api/auth/signin", post(signin::<S>))
        .route("/api/auth/refresh", post(refresh::<S>))
        .merge(protected)
}
