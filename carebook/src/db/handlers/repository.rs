//! Base repository trait for database operations.
//!
//! A repository is a data access layer for a single postgres table. Every table is written
//! through [`Repository::create`]; reads and deletes are inherent methods on each repository,
//! since each table is queried differently (patients by provider, providers by email).

use crate::db::errors::Result;

/// Base repository trait providing the insert every table shares
///
/// There is no update operation: providers and patients are immutable once written.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;
}
