//! Log repository: append-only persistence of [`LogEntry`] rows.
//!
//! Uses SqlitePoolManager and the `user_logs` table. There is no update, delete or query API;
//! [`LogRepository::count`] exists for health checks and tests.

use crate::error::StorageError;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::SecondsFormat;
use techbot_core::LogEntry;
use tracing::info;

#[derive(Clone)]
pub struct LogRepository {
    pool_manager: SqlitePoolManager,
}

impl LogRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating user_logs table if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                message TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        Ok(())
    }

    /// Appends one row and returns its id.
    pub async fn append(&self, entry: &LogEntry) -> Result<i64, StorageError> {
        let timestamp = entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);

        let result = sqlx::query(
            r#"
            INSERT INTO user_logs (user_id, message, timestamp)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&entry.user_id)
        .bind(&entry.message)
        .bind(&timestamp)
        .execute(self.pool_manager.pool())
        .await?;

        let id = result.last_insert_rowid();
        info!(
            id,
            user_id = %entry.user_id,
            message_len = entry.message.len(),
            "Saved log entry"
        );
        Ok(id)
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &sqlx::SqlitePool {
        self.pool_manager.pool()
    }

    /// Total number of rows.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_logs")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count)
    }
}
