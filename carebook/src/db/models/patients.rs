//! Database models for patients.

use crate::types::{PatientId, ProviderId};
use chrono::{DateTime, Utc};

/// Database request for creating a patient. Fields are stored exactly as given, so callers
/// normalize before building one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientCreateDBRequest {
    pub provider_id: ProviderId,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub dob: String,
    pub status: String,
    pub address: String,
}

/// Database response for a patient
#[derive(Debug, Clone)]
pub struct PatientDBResponse {
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
