/**
 * Server Initialization
 *
 * Builds the session manager and router from an [`AppConfig`].
 *
 * # Initialization Process
 *
 * 1. Open the database pool and run migrations
 * 2. Build the password hasher and token codec from configuration
 * 3. Wrap them in an `AuthService` over the PostgreSQL store
 * 4. Create the router
 */

use anyhow::Context;
use axum::Router;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::store::CredentialStore;
use crate::backend::auth::users::PgCredentialStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Create the application backed by PostgreSQL
pub async fn create_app(config: &AppConfig) -> anyhow::Result<Router> {
    tracing::info!("Initializing sessiongate backend server");

    let pool = load_database(config).await?;
    let app = create_app_with_store(PgCredentialStore::new(pool), config)?;

    tracing::info!("Router configured");

    Ok(app)
}

/// Create the application over any credential store
pub fn create_app_with_store<S: CredentialStore>(
    store: S,
    config: &AppConfig,
) -> anyhow::Result<Router> {
    let auth = AuthService::from_config(store, config)
        .context("failed to initialise session manager")?;

    tracing::debug!(
        bcrypt_cost = config.bcrypt_cost,
        access_ttl_secs = config.access_token_ttl_secs,
        refresh_ttl_secs = config.refresh_token_ttl_secs,
        "Session manager ready"
    );

    Ok(create_router(AppState::new(auth)))
}
