//! Types shared by the chat server and the logging sidecar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User id used when the caller does not send one.
pub const DEFAULT_USER_ID: &str = "defaultUser";

/// One user message as recorded by the logging sidecar.
///
/// Wire format is `{"userId", "message", "timestamp"}` with an RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub user_id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Creates an entry stamped with the current time.
    pub fn now(user_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
