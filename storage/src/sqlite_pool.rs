//! SQLite connection pool wrapper for the storage crate.

use log::info;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};

/// Manages a single SQLite pool; creates the DB file if missing.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
}

/// Strips an optional `sqlite://`, `sqlite:` or `file:` scheme from a database URL.
pub(crate) fn database_path(database_url: &str) -> &str {
    ["sqlite://", "sqlite:", "file:"]
        .iter()
        .find_map(|prefix| database_url.strip_prefix(prefix))
        .unwrap_or(database_url)
}

impl SqlitePoolManager {
    /// Creates a pool for the given database URL or file path.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let path = database_path(database_url);
        info!("Initializing SQLite pool: {}", path);

        let options = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(path);

        let pool = SqlitePool::connect_with(options).await?;

        Ok(Self { pool })
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
