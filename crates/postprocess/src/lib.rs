//! # Response post-processing
//!
//! A short, ordered pipeline of text rewrites applied to each completion before it is returned.
//!
//! ## Stages
//!
//! - [`SearchLinkStage`] – appends one Google search link when the user's text contains a keyword
//! - [`VideoLinkStage`] – replaces video links that no longer resolve with a plain-text notice
//!
//! Link liveness is delegated to an [`AvailabilityChecker`] so the page-matching heuristic can be
//! swapped without touching the stages.

mod availability;
mod config;
mod search_link;
mod video_link;

#[cfg(test)]
mod search_link_test;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

pub use availability::{
    Availability, AvailabilityChecker, HttpAvailabilityChecker, DEFAULT_UNAVAILABLE_MARKER,
};
pub use config::PipelineConfig;
pub use search_link::{
    build_search_url, SearchLinkStage, DEFAULT_SEARCH_KEYWORDS, SEARCH_LINK_TEXT,
    SEARCH_QUERY_PREFIX,
};
pub use video_link::{find_video_links, VideoLinkStage, VIDEO_FALLBACK_NOTICE};

/// One rewrite step. Receives the originating user text and the current response text.
#[async_trait]
pub trait ResponseStage: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the rewritten response. Stages never fail; a stage that cannot decide leaves the
    /// text as it is or applies its own fallback.
    async fn apply(&self, user_text: &str, response: String) -> String;
}

/// Ordered list of [`ResponseStage`]s.
#[derive(Clone, Default)]
pub struct PostProcessor {
    stages: Vec<Arc<dyn ResponseStage>>,
}

impl PostProcessor {
    /// Creates an empty pipeline (returns text unchanged).
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage; stages run in insertion order.
    pub fn add_stage(mut self, stage: Arc<dyn ResponseStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Names of the configured stages, in run order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Threads `response` through every stage.
    pub async fn run(&self, user_text: &str, response: String) -> String {
        let mut text = response;
        for stage in &self.stages {
            let before_len = text.len();
            text = stage.apply(user_text, text).await;
            debug!(
                stage = stage.name(),
                before_len,
                after_len = text.len(),
                "step: post-process stage done"
            );
        }
        text
    }
}
