//! Common test utilities and helpers
//!
//! - Configuration with fast bcrypt and fixed test secrets
//! - Session managers and HTTP test servers over the in-memory store
#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use sessiongate::backend::auth::{AuthService, MemoryCredentialStore};
use sessiongate::backend::server::create_app_with_store;
use sessiongate::shared::config::AppConfig;

pub const ACCESS_SECRET: &str = "integration-access-secret-0123456789";
pub const REFRESH_SECRET: &str = "integration-refresh-secret-0123456789";
pub const PASSWORD: &str = "correct horse battery staple";

/// Test configuration: bcrypt cost 4, default TTLs
pub fn test_config() -> AppConfig {
    test_config_with_refresh_ttl(604_800)
}

pub fn test_config_with_refresh_ttl(refresh_ttl_secs: u64) -> AppConfig {
    test_config_with_ttls(900, refresh_ttl_secs)
}

pub fn test_config_with_ttls(access_ttl_secs: u64, refresh_ttl_secs: u64) -> AppConfig {
    AppConfig::builder()
        .access_token_secret(ACCESS_SECRET)
        .refresh_token_secret(REFRESH_SECRET)
        .access_token_ttl_secs(access_ttl_secs)
        .refresh_token_ttl_secs(refresh_ttl_secs)
        .bcrypt_cost(4)
        .build()
        .expect("test configuration is valid")
}

pub fn memory_service() -> Arc<AuthService<MemoryCredentialStore>> {
    memory_service_with(&test_config())
}

pub fn memory_service_with(config: &AppConfig) -> Arc<AuthService<MemoryCredentialStore>> {
    Arc::new(
        AuthService::from_config(MemoryCredentialStore::new(), config)
            .expect("session manager builds"),
    )
}

/// HTTP test server over a fresh in-memory store
pub fn test_server() -> TestServer {
    test_server_with(&test_config())
}

pub fn test_server_with(config: &AppConfig) -> TestServer {
    let app = create_app_with_store(MemoryCredentialStore::new(), config).expect("app builds");
    TestServer::new(app).expect("test server starts")
}

/// Unique address per call so tests never collide on shared stores
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", uuid::Uuid::new_v4().simple())
}
