//! Repository implementations for database access.
//!
//! Each repository wraps a SQLx connection, binds parameters for its table's queries and returns
//! the domain models from [`crate::db::models`]. Inserts go through [`Repository`]; reads and
//! deletes are inherent methods.
//!
//! - [`Providers`]: Provider accounts and credential lookup
//! - [`Patients`]: Patient records, always scoped to a provider
//!
//! ```ignore
//! use carebook::db::handlers::Patients;
//! use carebook::db::handlers::patients::PatientFilter;
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let mut repo = Patients::new(&mut conn);
//!     let patients = repo.list(&PatientFilter::new(1)).await?;
//!     Ok(())
//! }
//! ```

pub mod patients;
pub mod providers;
pub mod repository;

pub use patients::Patients;
pub use providers::Providers;
pub use repository::Repository;
