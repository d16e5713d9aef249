use std::fmt;
use thiserror::Error;

/// Which class of schema rule rejected a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    Check,
    ForeignKey,
    NotNull,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintKind::Unique => write!(f, "Unique"),
            ConstraintKind::Check => write!(f, "Check"),
            ConstraintKind::ForeignKey => write!(f, "Foreign key"),
            ConstraintKind::NotNull => write!(f, "Not null"),
        }
    }
}

/// Unified error type for database operations that application code can handle
#[derive(Error, Debug)]
pub enum DbError {
    /// Entity not found by the given identifier
    #[error("Entity not found")]
    NotFound,

    /// A write was rejected by a schema constraint.
    ///
    /// `constraint` carries the constraint name as reported by Postgres, which is what callers
    /// match on to pick a user-facing message. `message` is the raw server text and must never be
    /// returned to API clients.
    #[error("{kind} constraint violation")]
    ConstraintViolation {
        kind: ConstraintKind,
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Catch-all for non-recoverable errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DbError {
    /// Name of the violated constraint, if this is a constraint violation that reported one
    pub fn violated_constraint(&self) -> Option<&str> {
        match self {
            DbError::ConstraintViolation { constraint, .. } => constraint.as_deref(),
            _ => None,
        }
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DbError::ConstraintViolation { .. })
    }
}

/// Convert from sqlx::Error using sqlx's error categorization
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err) => {
                let kind = match db_err.kind() {
                    sqlx::error::ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                    sqlx::error::ErrorKind::CheckViolation => Some(ConstraintKind::Check),
                    sqlx::error::ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                    sqlx::error::ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                    _ => None,
                };

                match kind {
                    Some(kind) => DbError::ConstraintViolation {
                        kind,
                        constraint: db_err.constraint().map(|s| s.to_string()),
                        table: db_err.table().map(|s| s.to_string()),
                        message: db_err.message().to_string(),
                    },
                    // All other database errors are non-recoverable - convert to anyhow
                    None => DbError::Other(anyhow::Error::from(err)),
                }
            }
            // All other sqlx errors are non-recoverable - convert to anyhow with context
            _ => DbError::Other(anyhow::Error::from(err)),
        }
    }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::NotFound));
        assert!(!err.is_constraint_violation());
        assert_eq!(err.violated_constraint(), None);
    }

    #[test]
    fn test_non_database_errors_are_opaque() {
        let err = DbError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DbError::Other(_)));
    }

    #[test]
    fn test_violated_constraint_name() {
        let err = DbError::ConstraintViolation {
            kind: ConstraintKind::Unique,
            constraint: Some("providers_email_unique".to_string()),
            table: Some("providers".to_string()),
            message: "duplicate key value violates unique constraint".to_string(),
        };
        assert!(err.is_constraint_violation());
        assert_eq!(err.violated_constraint(), Some("providers_email_unique"));
        assert_eq!(err.to_string(), "Unique constraint violation");
    }
}
