//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL, following the
//! Repository pattern.
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Integrity
//!
//! Length limits, email format, email uniqueness and per-provider patient uniqueness are all
//! schema constraints. Violations surface as [`errors::DbError::ConstraintViolation`], tagged with
//! the constraint name, and it is up to the API layer to turn those into user-facing messages.
//!
//! # Migrations
//!
//! The schema lives in the `migrations/` directory and is applied on startup by
//! [`crate::migrator`]. Tables are created with `IF NOT EXISTS`, so applying it to an existing
//! database is a no-op.

pub mod errors;
pub mod handlers;
pub mod models;
