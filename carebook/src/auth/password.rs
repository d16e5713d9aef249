//! Password hashing and verification.
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`), so the salt and
//! cost parameters travel with the hash and verification needs nothing else.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Plaintext behind [`dummy_hash`]; never matches a real account because it is never stored.
const DUMMY_PASSWORD: &str = "carebook-login-timing-parity";

static DUMMY_HASH: OnceCell<String> = OnceCell::new();

/// Argon2 hashing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Argon2Params {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Argon2Params {
    /// Create Argon2 instance with these parameters.
    fn to_argon2(self) -> Result<Argon2<'static>, Error> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None).map_err(|e| Error::Internal {
            operation: format!("create argon2 params: {e}"),
        })?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Check the parameters are accepted by Argon2 without hashing anything.
    pub fn validate(&self) -> Result<(), Error> {
        self.to_argon2().map(|_| ())
    }
}

impl Default for Argon2Params {
    /// Secure defaults for production (Argon2id RFC recommendations)
    fn default() -> Self {
        Self {
            memory_kib: 19456, // 19 MB
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Hash a string using Argon2.
///
/// Uses the provided parameters or secure defaults if None. A fresh random salt is generated on
/// every call.
pub fn hash_string_with_params(input: &str, params: Option<Argon2Params>) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = params.unwrap_or_default().to_argon2()?;

    let hash = argon2.hash_password(input.as_bytes(), &salt).map_err(|e| Error::Internal {
        operation: format!("hash string: {e}"),
    })?;

    Ok(hash.to_string())
}

/// Verify a string against a hash.
///
/// Verification uses the parameters and salt embedded in the hash itself, and the final
/// comparison is constant-time. A hash that cannot be parsed is an internal error, never `false`.
pub fn verify_string(input: &str, hash: &str) -> Result<bool, Error> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| Error::Internal {
        operation: format!("parse hash: {e}"),
    })?;

    let argon2 = Argon2::default();
    Ok(argon2.verify_password(input.as_bytes(), &parsed_hash).is_ok())
}

/// A hash to verify against when a login names an unknown email.
///
/// Running a real verification on that path makes "no such account" cost the same as "wrong
/// password". Computed once per process with the first parameters it is asked for;
/// [`crate::Application`] builds it at startup so no login pays for it.
pub fn dummy_hash(params: Argon2Params) -> Result<&'static str, Error> {
    DUMMY_HASH
        .get_or_try_init(|| hash_string_with_params(DUMMY_PASSWORD, Some(params)))
        .map(String::as_str)
}

#[cfg(test)]
pub(crate) fn dummy_hash_initialized() -> bool {
    DUMMY_HASH.get().is_some()
}
