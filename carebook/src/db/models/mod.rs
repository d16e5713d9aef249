//! Database record structures matching table schemas.
//!
//! Each submodule holds the `*CreateDBRequest` type a repository accepts and the
//! `*DBResponse` type it returns. API-facing shapes live in [`crate::api::models`].

pub mod patients;
pub mod providers;
