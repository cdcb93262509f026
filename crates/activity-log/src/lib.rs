//! # Activity log client
//!
//! Notifies the logging sidecar of each user message. Delivery is best effort: [`dispatch`]
//! spawns the call on a detached task and its failure only shows up in local diagnostics.

use async_trait::async_trait;
use std::sync::Arc;
use techbot_core::LogEntry;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Default sidecar endpoint.
pub const DEFAULT_LOG_SERVER_URL: &str = "http://localhost:4000/api/log";

#[derive(Error, Debug)]
pub enum ActivityLogError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Log server returned status {0}")]
    Status(u16),
}

/// Records one log entry somewhere durable.
#[async_trait]
pub trait ActivityLogger: Send + Sync {
    async fn record(&self, entry: &LogEntry) -> Result<(), ActivityLogError>;
}

/// Sends entries to the sidecar's `POST /api/log`.
#[derive(Debug, Clone)]
pub struct HttpActivityLogger {
    client: reqwest::Client,
    url: String,
}

impl HttpActivityLogger {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ActivityLogger for HttpActivityLogger {
    #[instrument(skip(self, entry), fields(url = %self.url, user_id = %entry.user_id))]
    async fn record(&self, entry: &LogEntry) -> Result<(), ActivityLogError> {
        let response = self.client.post(&self.url).json(entry).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ActivityLogError::Status(status.as_u16()));
        }
        debug!(status = %status, "Log sent successfully");
        Ok(())
    }
}

/// Logger used when the sidecar is disabled.
#[derive(Debug, Clone, Default)]
pub struct NoopActivityLogger;

#[async_trait]
impl ActivityLogger for NoopActivityLogger {
    async fn record(&self, _entry: &LogEntry) -> Result<(), ActivityLogError> {
        Ok(())
    }
}

/// Records `entry` on a detached task. Never blocks and never fails the caller.
///
/// Must be called from within a tokio runtime.
pub fn dispatch(logger: Arc<dyn ActivityLogger>, entry: LogEntry) {
    tokio::spawn(async move {
        match logger.record(&entry).await {
            Ok(()) => info!(user_id = %entry.user_id, "Activity logged"),
            Err(e) => warn!(
                error = %e,
                user_id = %entry.user_id,
                "Failed to log user activity"
            ),
        }
    });
}
