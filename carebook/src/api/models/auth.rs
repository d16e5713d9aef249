//! API request/response models for provider signup and login.

use crate::types::ProviderId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Signup request body. Both fields are required; they are optional here so that absence is
/// reported through the required-field check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request body
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Returned by both signup and login. The id is the caller's only credential for patient
/// operations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProviderIdResponse {
    pub provider_id: ProviderId,
}
