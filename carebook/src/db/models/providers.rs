//! Database models for providers.

use crate::types::ProviderId;
use chrono::{DateTime, Utc};

/// Database request for creating a new provider.
///
/// Only ever holds the Argon2 hash; plaintext passwords stop at the API layer.
#[derive(Debug, Clone)]
pub struct ProviderCreateDBRequest {
    pub email: String,
    pub password_hash: String,
}

/// Database response for a provider
#[derive(Debug, Clone)]
pub struct ProviderDBResponse {
    pub id: ProviderId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
