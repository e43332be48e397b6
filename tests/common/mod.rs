//! Shared fixtures: an in-memory database with migrations applied.

use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

use librarium::{
    config::{AppConfig, SessionConfig},
    repository::Repository,
    services::Services,
    AppState,
};

pub fn test_session_config() -> SessionConfig {
    SessionConfig {
        secret: "test-secret".to_string(),
        expiry_hours: 1,
    }
}

/// Repository and services over a fresh in-memory SQLite database.
pub async fn test_services() -> (Repository, Services) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations failed");

    let repository = Repository::new(pool);
    let services = Services::new(repository.clone(), test_session_config());
    (repository, services)
}

/// Application state for router-level tests.
#[allow(dead_code)]
pub async fn test_state() -> (Repository, AppState) {
    let (repository, services) = test_services().await;
    let config = AppConfig {
        session: test_session_config(),
        ..AppConfig::default()
    };
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };
    (repository, state)
}
