//! Core error types for the accumulation engine.
//!
//! This module defines storage- and network-agnostic error types. Storage
//! errors (Diesel, SQLite) and price source errors (HTTP, parsing) are
//! converted to these types by the crates that own those concerns.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the accumulation engine.
#[derive(Error, Debug)]
pub enum Error {
    /// The price oracle failed or returned data that could not be used.
    /// Raised before any settlement runs, so no state has been touched.
    #[error("Price unavailable: {0}")]
    PriceUnavailable(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The persisted ledger blob could not be decoded.
    /// The ledger loader recovers from this by substituting the default state.
    #[error("Persisted ledger state is corrupt: {0}")]
    CorruptPersistedState(String),

    /// A caller violated an operation contract (commit without a proposal,
    /// reset without confirmation, duplicate commit).
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for persistence operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert its own errors into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for caller input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl Error {
    /// Shorthand for an `InvalidInput` validation error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(message.into()))
    }
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::CorruptPersistedState(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
