//! Content availability checks for external links.

use async_trait::async_trait;
use tracing::{info, warn};

/// Text that video pages show when the video has been removed or made private.
pub const DEFAULT_UNAVAILABLE_MARKER: &str = "Video unavailable";

/// Result of an availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

/// Capability: decides whether an external URL still serves its content.
#[async_trait]
pub trait AvailabilityChecker: Send + Sync {
    async fn check(&self, url: &str) -> Availability;
}

/// Fetches the page and looks for an "unavailable" marker in the body.
///
/// This is a heuristic against third-party markup. Non-success statuses count as unavailable.
/// A failed fetch counts as unavailable when `fail_closed` is set, available otherwise.
#[derive(Debug, Clone)]
pub struct HttpAvailabilityChecker {
    client: reqwest::Client,
    marker: String,
    fail_closed: bool,
}

impl HttpAvailabilityChecker {
    /// Checker with the default marker, failing closed.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            marker: DEFAULT_UNAVAILABLE_MARKER.to_string(),
            fail_closed: true,
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_fail_closed(mut self, fail_closed: bool) -> Self {
        self.fail_closed = fail_closed;
        self
    }

    fn on_fetch_error(&self, url: &str, error: &reqwest::Error) -> Availability {
        warn!(url = %url, error = %error, fail_closed = self.fail_closed, "Video link fetch failed");
        if self.fail_closed {
            Availability::Unavailable
        } else {
            Availability::Available
        }
    }
}

#[async_trait]
impl AvailabilityChecker for HttpAvailabilityChecker {
    async fn check(&self, url: &str) -> Availability {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => return self.on_fetch_error(url, &e),
        };

        let status = response.status();
        if !status.is_success() {
            info!(url = %url, status = %status, "Video link returned non-success status");
            return Availability::Unavailable;
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => return self.on_fetch_error(url, &e),
        };

        if body.contains(&self.marker) {
            info!(url = %url, "Video page contains unavailable marker");
            Availability::Unavailable
        } else {
            Availability::Available
        }
    }
}
