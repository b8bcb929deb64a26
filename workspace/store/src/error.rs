use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

/// Error types for the entity store
#[derive(Error, Debug)]
pub enum StoreError {
    /// A uniqueness rule would be broken
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A foreign reference points to a record that does not exist
    #[error("Reference error: {0}")]
    Reference(String),

    /// A field value is out of range or too long
    #[error("Validation error: {0}")]
    Validation(String),

    /// The record addressed by a single-record operation does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other failure reported by the database
    #[error("Database error: {0}")]
    Database(DbErr),
}

// Constraint failures raised by the database itself are folded into the
// same variants the store reports for its own checks.
impl From<DbErr> for StoreError {
    fn from(error: DbErr) -> Self {
        match error.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                let err = StoreError::ConstraintViolation(message);
                error!(?err, "Unique constraint rejected by database");
                err
            }
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                let err = StoreError::Reference(message);
                error!(?err, "Foreign key constraint rejected by database");
                err
            }
            _ => {
                error!(%error, "Database error");
                StoreError::Database(error)
            }
        }
    }
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        let err = StoreError::Validation(errors.to_string());
        warn!(?err, "Input rejected");
        err
    }
}

/// Type alias for Result with StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Points {
        #[validate(range(min = 0))]
        points: i32,
    }

    #[test]
    fn test_validation_errors_name_the_field() {
        let errors = Points { points: -3 }.validate().unwrap_err();

        let err = StoreError::from(errors);

        match err {
            StoreError::Validation(message) => assert!(message.contains("points"), "{}", message),
            other => panic!("expected a validation error, got {:?}", other),
        }
    }
}
