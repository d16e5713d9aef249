//! HTTP request handlers for all API endpoints.
//!
//! Each handler checks its request, calls the repositories in [`crate::db::handlers`] and
//! translates storage failures into the fixed client-facing messages of [`crate::errors::Error`].
//!
//! # Handler Modules
//!
//! - [`auth`]: Provider signup and login
//! - [`patients`]: Patient creation and listing, scoped to a provider
//!
//! There is no session layer: the `provider_id` returned by signup and login is passed back
//! explicitly on every patient request.

pub mod auth;
pub mod patients;
