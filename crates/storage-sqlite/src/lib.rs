//! SQLite storage for the accumulation engine.
//!
//! This crate is the only place where Diesel dependencies exist. It
//! implements the [`LedgerStore`](accrue_core::LedgerStore) contract from
//! `accrue-core` on top of a single key-value table and contains:
//! - Database initialization and connection pooling
//! - Embedded Diesel migrations
//! - A single-writer actor that serializes all writes
//!
//! ```text
//! accrue-core (Ledger)
//!        │  LedgerStore
//!        ▼
//! storage-sqlite (this crate)
//!        │
//!        ▼
//!    SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod ledger;
pub mod schema;

pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};
pub use errors::StorageError;
pub use ledger::SqliteLedgerStore;

pub use accrue_core::errors::{DatabaseError, Error, Result};
