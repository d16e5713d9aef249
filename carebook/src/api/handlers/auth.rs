use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    AppState,
    api::models::{
        auth::{LoginRequest, ProviderIdResponse, SignupRequest},
        missing_fields,
    },
    auth::password,
    db::{
        handlers::{Providers, Repository},
        models::providers::ProviderCreateDBRequest,
    },
    errors::Error,
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";
const SIGNUP_REJECTED: &str = "Email already registered or invalid format";

/// Register a new provider account
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    tag = "authentication",
    responses(
        (status = 201, description = "Provider registered", body = ProviderIdResponse),
        (status = 400, description = "Unreadable body, missing fields, duplicate email or malformed email", body = crate::errors::ErrorBody),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProviderIdResponse>), Error> {
    let Json(request) = body?;
    let (email, password) = match (request.email, request.password) {
        (Some(email), Some(password)) => (email, password),
        (email, password) => return Err(missing_fields(&[("email", email.is_some()), ("password", password.is_some())])),
    };

    // Hash the password on a blocking thread to avoid blocking async runtime
    let params = state.config.auth.password.argon2;
    let password_hash = tokio::task::spawn_blocking(move || password::hash_string_with_params(&password, Some(params)))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("spawn password hashing task: {e}"),
        })??;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut provider_repo = Providers::new(&mut pool_conn);

    // Duplicate and malformed emails are both rejected by the schema and reported the same way
    let created = provider_repo
        .create(&ProviderCreateDBRequest { email, password_hash })
        .await
        .map_err(|e| {
            if e.is_constraint_violation() {
                tracing::debug!(constraint = ?e.violated_constraint(), "Signup rejected");
                Error::BadRequest {
                    message: SIGNUP_REJECTED.to_string(),
                }
            } else {
                Error::Database(e)
            }
        })?;

    tracing::info!(provider_id = created.id, "Provider registered");

    Ok((StatusCode::CREATED, Json(ProviderIdResponse { provider_id: created.id })))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    tag = "authentication",
    responses(
        (status = 200, description = "Login successful", body = ProviderIdResponse),
        (status = 400, description = "Unreadable body or missing fields", body = crate::errors::ErrorBody),
        (status = 401, description = "Invalid credentials", body = crate::errors::ErrorBody),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ProviderIdResponse>, Error> {
    let Json(request) = body?;
    let (email, password) = match (request.email, request.password) {
        (Some(email), Some(password)) => (email, password),
        (email, password) => return Err(missing_fields(&[("email", email.is_some()), ("password", password.is_some())])),
    };

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let provider = Providers::new(&mut pool_conn).get_provider_by_email(&email).await?;

    // An unknown email still pays for one verification so it can't be told apart by timing
    let (provider_id, hash) = match provider {
        Some(provider) => (Some(provider.id), provider.password_hash),
        None => (None, password::dummy_hash(state.config.auth.password.argon2)?.to_string()),
    };

    // Verify password on a blocking thread to avoid blocking async runtime
    let is_valid = tokio::task::spawn_blocking(move || password::verify_string(&password, &hash))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("spawn password verification task: {e}"),
        })??;

    match provider_id {
        Some(provider_id) if is_valid => Ok(Json(ProviderIdResponse { provider_id })),
        _ => Err(Error::Unauthenticated {
            message: Some(INVALID_CREDENTIALS.to_string()),
        }),
    }
}
