use models::{errors::ModelError, validation::ValidationErrors};
use sea_orm::DbErr;
use thiserror::Error;

/// Failure of a directory operation, classified so the caller can pick a
/// client- or server-side response.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input broke one or more field rules, or could not be decoded.
    #[error("validation error: {0}")]
    Validation(String),
    /// The store refused the write on a foreign-key or unique constraint.
    #[error("constraint violation: {0}")]
    Constraint(String),
    /// The store was unreachable, too slow, or failed for infrastructural reasons.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(v) => Self::Validation(v.to_string()),
            ModelError::Constraint(m) => Self::Constraint(m),
            ModelError::Db(m) => Self::Persistence(m),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(e: ValidationErrors) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        ModelError::from(e).into()
    }
}
