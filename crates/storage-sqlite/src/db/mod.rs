use log::{error, info};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use diesel::connection::{Connection, SimpleConnection};
use diesel::r2d2::{self, ConnectionManager, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::StorageError;
use accrue_core::errors::{DatabaseError, Error, Result};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// File name used when the configured path is a directory.
const DEFAULT_DB_FILE: &str = "accrue.db";

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub mod write_actor;
pub use write_actor::{spawn_writer, WriteHandle};

/// Creates the database file and its directory if needed and switches it to
/// WAL mode. Returns the resolved database path.
pub fn init(db_location: &str) -> Result<String> {
    let db_path = get_db_path(db_location);

    if let Some(db_dir) = Path::new(&db_path).parent() {
        if !db_dir.as_os_str().is_empty() && !db_dir.exists() {
            fs::create_dir_all(db_dir)?;
        }
    }

    let mut conn = SqliteConnection::establish(&db_path).map_err(StorageError::from)?;
    conn.batch_execute(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA busy_timeout = 30000;
        PRAGMA synchronous = NORMAL;
        ",
    )
    .map_err(StorageError::from)?;

    Ok(db_path)
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = r2d2::Pool::builder()
        .max_size(4)
        .min_idle(Some(1))
        .connection_timeout(Duration::from_secs(30))
        .connection_customizer(Box::new(ConnectionCustomizer))
        .build(manager)
        .map_err(StorageError::from)?;
    Ok(Arc::new(pool))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().map_err(|e| StorageError::from(e).into())
}

pub fn run_migrations(pool: &DbPool) -> Result<()> {
    info!("Running database migrations");
    let mut connection = get_connection(pool)?;

    let applied = connection.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("Database migration failed: {}", e);
        Error::Database(DatabaseError::MigrationFailed(e.to_string()))
    })?;

    if applied.is_empty() {
        info!("No pending migrations to apply.");
    } else {
        for version in &applied {
            info!("Applied migration {}", version);
        }
    }

    Ok(())
}

/// Resolves the database file path. A location without a file extension is
/// treated as a directory holding `accrue.db`.
pub fn get_db_path(db_location: &str) -> String {
    let path = Path::new(db_location);
    if path.extension().is_some() {
        db_location.to_string()
    } else {
        path.join(DEFAULT_DB_FILE).to_string_lossy().into_owned()
    }
}

#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), r2d2::Error> {
        conn.batch_execute(
            "
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous = NORMAL;
            ",
        )
        .map_err(r2d2::Error::QueryError)
    }
}
