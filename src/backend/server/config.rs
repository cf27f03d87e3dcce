/**
 * Server Configuration
 *
 * Opens the PostgreSQL pool described by `DATABASE_URL` and brings the
 * schema up to date.
 *
 * # Error Handling
 *
 * Unlike optional integrations, the credential store is required: a
 * missing URL, a failed connection or a failed migration aborts startup.
 */

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::shared::config::AppConfig;

const MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("DATABASE_URL is not set")]
    MissingUrl,

    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Load and initialize the database connection pool
///
/// 1. Reads the DSN from configuration
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs the embedded migrations
pub async fn load_database(config: &AppConfig) -> Result<PgPool, DatabaseError> {
    let database_url = config
        .database_url
        .as_ref()
        .ok_or(DatabaseError::MissingUrl)?;

    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(config.store_timeout)
        .connect(database_url.expose_secret())
        .await
        .map_err(DatabaseError::Connect)?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
