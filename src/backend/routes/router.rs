/**
 * Router Configuration
 *
 * Combines all route groups into the application router.
 *
 * # Route Order
 *
 * 1. Health probe
 * 2. API routes (auth)
 * 3. Fallback handler (JSON 404)
 *
 * Every request passes through `TraceLayer`, which opens a span per
 * request and logs the response status and latency. Header values are
 * not recorded, so bearer tokens never reach the log.
 */

use axum::{http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::auth::store::CredentialStore;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router<S: CredentialStore>(app_state: AppState<S>) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_api_routes(router, &app_state);

    router
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

/// Liveness probe
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "code": "not_found",
            "status": 404,
        })),
    )
}
