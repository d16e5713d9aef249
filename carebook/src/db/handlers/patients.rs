//! Database repository for patients.
//!
//! Every read is scoped by provider: there is no query that returns patients across
//! providers.

use crate::db::{
    errors::Result,
    handlers::repository::Repository,
    models::patients::{PatientCreateDBRequest, PatientDBResponse},
};
use crate::types::{PatientId, ProviderId};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};
use tracing::instrument;

/// Unique constraint over `(provider_id, first_name, last_name, dob)`
pub const PATIENT_IDENTITY_CONSTRAINT: &str = "patients_provider_identity_unique";

/// Filter for listing patients. A provider is always required.
#[derive(Debug, Clone)]
pub struct PatientFilter {
    pub provider_id: ProviderId,
}

impl PatientFilter {
    pub fn new(provider_id: ProviderId) -> Self {
        Self { provider_id }
    }
}

// Database entity model
#[derive(Debug, Clone, FromRow)]
struct Patient {
    pub id: PatientId,
    pub provider_id: ProviderId,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub dob: String,
    pub status: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl From<Patient> for PatientDBResponse {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            provider_id: patient.provider_id,
            first_name: patient.first_name,
            middle_name: patient.middle_name,
            last_name: patient.last_name,
            dob: patient.dob,
            status: patient.status,
            address: patient.address,
            created_at: patient.created_at,
        }
    }
}

pub struct Patients<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Patients<'c> {
    type CreateRequest = PatientCreateDBRequest;
    type Response = PatientDBResponse;

    #[instrument(skip(self, request), fields(provider_id = request.provider_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            INSERT INTO patients (provider_id, first_name, middle_name, last_name, dob, status, address)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(request.provider_id)
        .bind(&request.first_name)
        .bind(&request.middle_name)
        .bind(&request.last_name)
        .bind(&request.dob)
        .bind(&request.status)
        .bind(&request.address)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(PatientDBResponse::from(patient))
    }
}

impl<'c> Patients<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Patients of one provider, in insertion order.
    #[instrument(skip(self, filter), fields(provider_id = filter.provider_id), err)]
    pub async fn list(&mut self, filter: &PatientFilter) -> Result<Vec<PatientDBResponse>> {
        let patients = sqlx::query_as::<_, Patient>("SELECT * FROM patients WHERE provider_id = $1 ORDER BY id")
            .bind(filter.provider_id)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(patients.into_iter().map(PatientDBResponse::from).collect())
    }
}
