//! Relational storage for the tournament tracker.
//!
//! The roster (`player`) and match log (`match`) tables are the source of
//! truth; the `win_count` and `matches_count` views derive each player's win
//! record from them. Every operation checks a connection out of a shared
//! [`SqlitePool`] for the duration of its statement and returns it on every
//! exit path.

mod store;

pub use store::TournamentStore;

use std::path::Path;

use sqlx::sqlite::SqlitePool;
use sqlx::{Pool, Sqlite};
use thiserror::Error;
use tracing::info;

/// Shared connection pool handle.
pub type DbPool = Pool<Sqlite>;

/// Errors that can occur during storage operations.
///
/// Failures are surfaced directly to the caller; no operation retries or
/// recovers locally.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Open a connection pool for the given database URL.
///
/// For `sqlite:` URLs the database file (and its parent directory) is created
/// if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, StorageError> {
    if let Some(db_path) = database_url.strip_prefix("sqlite:") {
        let db_path = Path::new(db_path);
        if !db_path.exists() {
            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent).ok();
            }
            std::fs::File::create(db_path).ok();
        }
    }

    let pool = SqlitePool::connect(database_url).await?;
    Ok(pool)
}

/// Apply the schema migration. Safe to run repeatedly.
pub async fn run_migrations(pool: &DbPool) -> Result<(), StorageError> {
    let migration_sql = include_str!("migrations/001_initial_schema.sql");

    sqlx::raw_sql(migration_sql).execute(pool).await?;

    info!("database migrations completed");
    Ok(())
}
