//! # staffctl: Employee Records Service
//!
//! `staffctl` is a small web service for managing employee records. It exposes a
//! RESTful CRUD API over a single employee entity (id, full name, designation)
//! plus a rendered HTML homepage, backed by SQLite.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the
//! HTTP layer and uses SQLite (via sqlx) for persistence. The database file is
//! created and migrated automatically on startup, so the service runs
//! self-contained with no external infrastructure.
//!
//! ### Request Flow
//!
//! Requests to `/employees` pass through JSON deserialization into the API
//! models ([`api::models`]), reach a handler ([`api::handlers`]) which acquires
//! a connection from the shared pool and performs the operation through the
//! employee repository ([`db::handlers`]), and serialize the result back out.
//! Errors at any stage convert into HTTP responses via [`errors::Error`].
//!
//! The homepage routes (`/` and `/home/{first}/{last}`) render an HTML
//! greeting and never touch the database.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use staffctl::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = staffctl::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     staffctl::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
mod types;

#[cfg(test)]
pub mod test_utils;

use crate::openapi::ApiDoc;
use axum::{Router, routing::get};
pub use config::Config;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::EmployeeId;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
}

/// Migrator for the database schema, embedded at compile time.
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Open the SQLite database named by the config, creating the file if it does
/// not exist, and bring the schema up to date.
async fn setup_database(config: &Config) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    migrator().run(&pool).await?;

    Ok(pool)
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/", get(api::handlers::home::homepage))
        .route("/home/{first_name}/{last_name}", get(api::handlers::home::homepage_for))
        .route(
            "/employees",
            get(api::handlers::employees::list_employees)
                .post(api::handlers::employees::create_employee)
                .put(api::handlers::employees::update_employee),
        )
        .route(
            "/employees/{id}",
            get(api::handlers::employees::get_employee).delete(api::handlers::employees::delete_employee),
        )
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    // Add tracing layer
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// The running application: router, configuration, and database pool.
pub struct Application {
    router: Router,
    config: Config,
    pool: SqlitePool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting employee records service with configuration: {:#?}", config);

        let pool = setup_database(&config).await?;

        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };

        let router = build_router(state);

        Ok(Self { router, config, pool })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Employee records service listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        self.pool.close().await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::SqlitePool;

    #[sqlx::test]
    async fn test_healthz(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.get("/healthz").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "OK");
    }

    // Full lifecycle of a single record through the HTTP surface
    #[sqlx::test]
    async fn test_employee_lifecycle(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server
            .post("/employees")
            .json(&json!({"fullName": "Jane Doe", "designation": "Engineer"}))
            .await;
        response.assert_status_ok();
        assert_eq!(response.text(), "Employee saved");

        let body: serde_json::Value = server.get("/employees/1").await.json();
        assert_eq!(body, json!({"id": 1, "fullName": "Jane Doe", "designation": "Engineer"}));

        let response = server
            .put("/employees")
            .json(&json!({"id": 1, "designation": "Staff Engineer"}))
            .await;
        response.assert_status_ok();
        assert_eq!(response.text(), "Employee updated");

        let response = server.delete("/employees/1").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "Employee deleted");

        server.get("/employees/1").await.assert_status(StatusCode::NOT_FOUND);
    }
}
