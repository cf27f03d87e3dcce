/**
 * Application State Management
 *
 * `AppState` is the Axum router state. It holds the session manager behind
 * an `Arc`, so cloning the state per request is cheap.
 *
 * The state is generic over the credential store: the server binary runs
 * on [`PgCredentialStore`](crate::backend::auth::users::PgCredentialStore)
 * while tests use
 * [`MemoryCredentialStore`](crate::backend::auth::store::MemoryCredentialStore).
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use sessiongate::backend::server::state::AppState;
 *
 * async fn handler<S: CredentialStore>(State(state): State<AppState<S>>) {
 *     let pair = state.auth.signin("a@example.com", "pw").await;
 * }
 * ```
 */

use std::sync::Arc;

use crate::backend::auth::service::AuthService;

/// Router state shared by every handler
pub struct AppState<S> {
    /// Session manager
    pub auth: Arc<AuthService<S>>,
}

impl<S> AppState<S> {
    pub fn new(auth: AuthService<S>) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}

// Manual impl: `S` itself need not be `Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            auth: Arc::clone(&self.auth),
        }
    }
}
