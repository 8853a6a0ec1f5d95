use sea_orm::{sqlx, DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),
    /// The store rejected the write on a foreign-key or unique constraint.
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("database error: {0}")]
    Db(String),
}

/// Foreign-key codes `sql_err()` does not recognise. SQLite reports a
/// delete blocked by RESTRICT as 1811 (SQLITE_CONSTRAINT_TRIGGER).
const FOREIGN_KEY_CODES: [&str; 3] = ["787", "1811", "23503"];

fn is_foreign_key_violation(e: &DbErr) -> bool {
    let rt = match e {
        DbErr::Exec(rt) | DbErr::Query(rt) => rt,
        _ => return false,
    };
    match rt {
        RuntimeErr::SqlxError(sqlx::Error::Database(db)) => {
            db.code().is_some_and(|c| FOREIGN_KEY_CODES.contains(&c.as_ref()))
                || db.message().contains("FOREIGN KEY constraint failed")
        }
        _ => false,
    }
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Constraint(msg),
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Constraint(msg),
            _ if is_foreign_key_violation(&e) => Self::Constraint(e.to_string()),
            _ => Self::Db(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_stay_db_errors() {
        let e = DbErr::Conn(RuntimeErr::Internal("connection refused".into()));
        assert!(matches!(ModelError::from(e), ModelError::Db(_)));
    }

    #[test]
    fn internal_exec_errors_are_not_constraints() {
        let e = DbErr::Exec(RuntimeErr::Internal("FOREIGN KEY constraint failed".into()));
        assert!(matches!(ModelError::from(e), ModelError::Db(_)));
    }
}
