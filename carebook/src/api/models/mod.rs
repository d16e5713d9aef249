//! Request/response data structures for API communication.
//!
//! Request bodies deserialize every field as optional and are checked against an explicit
//! required-field list before any storage access, so a client sees every missing field at once
//! instead of a deserializer error for the first one.

pub mod auth;
pub mod patients;

use crate::errors::Error;

/// Build an [`Error::MissingFields`] naming every `(field, present)` pair that is absent, in the
/// order given.
pub(crate) fn missing_fields(checks: &[(&'static str, bool)]) -> Error {
    Error::MissingFields {
        fields: checks.iter().filter(|(_, present)| !present).map(|(name, _)| *name).collect(),
    }
}
