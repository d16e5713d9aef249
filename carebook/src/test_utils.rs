//! Test utilities for integration testing.

use crate::auth::password::{self, Argon2Params};
use crate::config::{Config, DatabaseConfig, PoolSettings};
use crate::db::handlers::{Providers, Repository};
use crate::db::models::providers::{ProviderCreateDBRequest, ProviderDBResponse};
use axum_test::TestServer;
use sqlx::PgPool;

/// Argon2 parameters cheap enough to hash on every test signup
pub fn fast_argon2_params() -> Argon2Params {
    Argon2Params {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    }
}

pub fn create_test_config() -> Config {
    let mut config = Config {
        database_url: None,
        database: DatabaseConfig {
            // Tests get their pool from #[sqlx::test], never from this url
            url: "postgres://unused".to_string(),
            pool: PoolSettings {
                max_connections: 1,
                min_connections: 1,
                ..Default::default()
            },
        },
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Default::default()
    };
    config.auth.password.argon2 = fast_argon2_params();
    config
}

/// Serve the full router, as built for production, over the given pool
pub fn create_test_server(pool: PgPool) -> TestServer {
    crate::Application::new_with_pool(create_test_config(), pool)
        .expect("Failed to build application")
        .into_test_server()
}

/// Insert a provider directly, with a fast hash of the password "password"
pub async fn create_test_provider(pool: &PgPool, email: &str) -> ProviderDBResponse {
    let password_hash = password::hash_string_with_params("password", Some(fast_argon2_params())).expect("Failed to hash password");

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Providers::new(&mut conn)
        .create(&ProviderCreateDBRequest {
            email: email.to_string(),
            password_hash,
        })
        .await
        .expect("Failed to create test provider")
}
