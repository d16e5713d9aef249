use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    AppState,
    api::models::patients::{ListPatientsQuery, PatientCreate, PatientResponse, parse_provider_id},
    db::{
        errors::DbError,
        handlers::{Patients, Repository, patients::PATIENT_IDENTITY_CONSTRAINT, patients::PatientFilter},
    },
    errors::Error,
};

const PATIENT_EXISTS: &str = "This patient already exists for this provider.";
const NAME_TOO_LONG: &str = "Name field is too long. Please shorten and try again.";

/// Translate a rejected patient insert into one of the fixed client-facing messages.
///
/// The per-provider identity constraint is recognised by name; every other constraint violation
/// is reported as an overlong name.
fn translate_create_error(err: DbError) -> Error {
    match err.violated_constraint() {
        Some(PATIENT_IDENTITY_CONSTRAINT) => Error::BadRequest {
            message: PATIENT_EXISTS.to_string(),
        },
        _ if err.is_constraint_violation() => {
            tracing::debug!(constraint = ?err.violated_constraint(), "Patient insert rejected");
            Error::BadRequest {
                message: NAME_TOO_LONG.to_string(),
            }
        }
        _ => Error::Database(err),
    }
}

/// List patients owned by a provider
#[utoipa::path(
    get,
    path = "/patients",
    tag = "patients",
    params(ListPatientsQuery),
    responses(
        (status = 200, description = "Patients of the provider, oldest first", body = [PatientResponse]),
        (status = 400, description = "Missing or invalid provider_id", body = crate::errors::ErrorBody),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_patients(
    State(state): State<AppState>,
    Query(query): Query<ListPatientsQuery>,
) -> Result<Json<Vec<PatientResponse>>, Error> {
    let provider_id = parse_provider_id(query.provider_id.as_deref())?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let patients = Patients::new(&mut pool_conn).list(&PatientFilter::new(provider_id)).await?;

    Ok(Json(patients.into_iter().map(PatientResponse::from).collect()))
}

/// Create a patient for a provider
#[utoipa::path(
    post,
    path = "/patients",
    tag = "patients",
    request_body = PatientCreate,
    responses(
        (status = 201, description = "Patient created", body = PatientResponse),
        (status = 400, description = "Unreadable body, missing or invalid provider_id, missing fields, duplicate patient or overlong name", body = crate::errors::ErrorBody),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_patient(
    State(state): State<AppState>,
    body: Result<Json<PatientCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<PatientResponse>), Error> {
    let Json(request) = body?;
    let provider_id = request.provider_id()?;
    let db_request = request.into_db_request(provider_id)?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let created = Patients::new(&mut pool_conn)
        .create(&db_request)
        .await
        .map_err(translate_create_error)?;

    tracing::info!(patient_id = created.id, "Patient created");

    Ok((StatusCode::CREATED, Json(PatientResponse::from(created))))
}
