//! Database repository for providers.

use crate::db::{
    errors::Result,
    handlers::repository::Repository,
    models::providers::{ProviderCreateDBRequest, ProviderDBResponse},
};
use crate::types::ProviderId;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};
use tracing::instrument;

/// Unique constraint on `providers.email`
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "providers_email_unique";

// Database entity model
#[derive(Debug, Clone, FromRow)]
struct Provider {
    pub id: ProviderId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<Provider> for ProviderDBResponse {
    fn from(provider: Provider) -> Self {
        Self {
            id: provider.id,
            email: provider.email,
            password_hash: provider.password_hash,
            created_at: provider.created_at,
        }
    }
}

pub struct Providers<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Providers<'c> {
    type CreateRequest = ProviderCreateDBRequest;
    type Response = ProviderDBResponse;

    #[instrument(skip(self, request), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let provider = sqlx::query_as::<_, Provider>(
            r#"
            INSERT INTO providers (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(&request.email)
        .bind(&request.password_hash)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(ProviderDBResponse::from(provider))
    }
}

impl<'c> Providers<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Owned patients go with the provider (`ON DELETE CASCADE`).
    #[instrument(skip(self), fields(provider_id = id), err)]
    pub async fn delete(&mut self, id: ProviderId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM providers WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Exact-match lookup; no case folding is applied to the email.
    #[instrument(skip(self, email), err)]
    pub async fn get_provider_by_email(&mut self, email: &str) -> Result<Option<ProviderDBResponse>> {
        let provider = sqlx::query_as::<_, Provider>("SELECT id, email, password_hash, created_at FROM providers WHERE email = $1")
            .bind(email)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(provider.map(ProviderDBResponse::from))
    }
}
