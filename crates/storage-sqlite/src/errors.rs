//! Storage-specific error types for SQLite operations.
//!
//! Diesel and r2d2 errors are wrapped here and converted to the
//! database-agnostic errors of `accrue_core` at the crate boundary.

use accrue_core::errors::{DatabaseError, Error};
use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Core error: {0}")]
    CoreError(String),
}

/// Lets write jobs returning core errors run inside a Diesel transaction.
impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::CoreError(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::NotFound) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(DieselError::RollbackTransaction) => {
                Error::Database(DatabaseError::TransactionFailed(
                    "transaction rolled back".to_string(),
                ))
            }
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::MigrationFailed(e) => Error::Database(DatabaseError::MigrationFailed(e)),
            StorageError::CoreError(e) => Error::Database(DatabaseError::Internal(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_database_not_found() {
        let err: Error = StorageError::QueryFailed(DieselError::NotFound).into();
        assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
    }

    #[test]
    fn test_migration_failure_keeps_message() {
        let err: Error = StorageError::MigrationFailed("bad sql".to_string()).into();
        match err {
            Error::Database(DatabaseError::MigrationFailed(msg)) => assert_eq!(msg, "bad sql"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
