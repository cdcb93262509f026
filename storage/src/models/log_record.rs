//! Log record model: one row of the `user_logs` table.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LogRecord {
    pub id: i64,
    pub user_id: String,
    pub message: String,
    /// ISO 8601 / RFC 3339 text, UTC, millisecond precision.
    pub timestamp: String,
}
