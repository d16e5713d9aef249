//! HTTP API surface, mounted under `/api`.

pub mod handlers;
pub mod models;
