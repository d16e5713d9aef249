//! # carebook: patient records for independent clinicians
//!
//! `carebook` is a small multi-tenant record service. Clinicians ("providers") sign up with an
//! email and password, and each provider keeps a private list of patients. Every patient belongs
//! to exactly one provider, and no request can read another provider's patients.
//!
//! ## Architecture
//!
//! The service is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and uses
//! PostgreSQL, through SQLx, for all persistence. The schema lives in `migrations/` and is applied
//! on startup.
//!
//! A request reaches one of the handlers in [`api::handlers`], which checks the request body for
//! required fields, normalizes it, and calls a repository from [`db::handlers`]. Data-shape rules
//! (name lengths, email format, uniqueness) are enforced by the schema; handlers recognise the
//! resulting constraint violations by constraint name and turn them into fixed client-facing
//! messages, so raw storage errors never leave the process.
//!
//! Passwords are hashed with Argon2id ([`auth::password`]) on a blocking thread. Login is
//! uniform: a wrong password and an unknown email produce the same response after the
//! same amount of hashing work.
//!
//! ## Endpoints
//!
//! - `POST /api/signup` and `POST /api/login`: return `{ "provider_id": .. }`
//! - `GET /api/patients?provider_id=..` and `POST /api/patients`
//! - `GET /healthz`, `GET /api-docs/openapi.json`, and interactive docs at `/docs`
//!
//! ## Configuration
//!
//! See [`config`] for the YAML file and `CAREBOOK_` environment overrides.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use axum::{
    Router,
    routing::{get, post},
};
use bon::Builder;
pub use config::Config;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::openapi::ApiDoc;

pub use types::{PatientId, ProviderId};

/// Application state shared across all request handlers.
///
/// # Example
///
/// ```ignore
/// let state = AppState::builder().db(pool).config(config).build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the carebook database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Open the connection pool described by `config` and bring the schema up to date.
pub async fn setup_database(config: &Config) -> anyhow::Result<PgPool> {
    let settings = &config.database.pool;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout())
        .idle_timeout(settings.idle_timeout())
        .max_lifetime(settings.max_lifetime())
        .connect(&config.database.url)
        .await?;

    migrator().run(&pool).await?;
    info!("Database migrations applied");

    Ok(pool)
}

/// Build the application router: the `/api` routes, health check, OpenAPI docs and request
/// tracing.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/signup", post(api::handlers::auth::signup))
        .route("/login", post(api::handlers::auth::login))
        .route(
            "/patients",
            get(api::handlers::patients::list_patients).post(api::handlers::patients::create_patient),
        );

    Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { axum::Json(ApiDoc::openapi()) }))
        .nest("/api", api_routes)
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// A configured, migrated application ready to serve.
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance, connecting to the configured database
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = setup_database(&config).await?;
        Self::new_with_pool(config, pool)
    }

    /// Create an application around an existing, already migrated pool
    pub fn new_with_pool(config: Config, pool: PgPool) -> anyhow::Result<Self> {
        debug!("Starting carebook with configuration: {:#?}", config);

        // Built before serving so the first unknown-email login costs one verification, like any other
        auth::password::dummy_hash(config.auth.password.argon2)?;

        let state = AppState::builder().db(pool.clone()).config(config.clone()).build();
        let router = build_router(state);

        Ok(Self { router, config, pool })
    }

    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("Carebook listening on http://{}", bind_addr);

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        info!("Closing database connections...");
        self.pool.close().await;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}

#[cfg(test)]
mod test;
