//! Common type definitions.
//!
//! Entity identifiers are database-assigned `BIGINT` identity values. They are wrapped in type
//! aliases so signatures say which entity an id belongs to:
//!
//! - [`ProviderId`]: Provider (clinician) account identifier
//! - [`PatientId`]: Patient record identifier
//!
//! A [`ProviderId`] returned from login is the only credential the API hands back; every patient
//! operation is scoped by it.

pub type ProviderId = i64;
pub type PatientId = i64;
