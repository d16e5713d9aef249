//! Credential handling for provider accounts.
//!
//! Providers authenticate with email and password. Passwords are hashed with Argon2id in
//! [`password`] before they reach the database and are never logged.
//!
//! There is no session layer: a successful login returns the provider's id, and callers pass
//! that id as `provider_id` on every patient request.

pub mod password;
