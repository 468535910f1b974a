//! Test utilities for integration testing.

use crate::{AppState, Config, build_router};
use axum_test::TestServer;
use sqlx::SqlitePool;

pub async fn create_test_app(pool: SqlitePool) -> TestServer {
    let state = AppState {
        db: pool,
        config: create_test_config(),
    };

    let router = build_router(state);
    TestServer::new(router).expect("Failed to create test server")
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: crate::config::DatabaseConfig {
            url: "sqlite::memory:".to_string(),
        },
    }
}
