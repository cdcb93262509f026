//! Pipeline configuration: which stages run and with which parameters.

use std::sync::Arc;

use crate::{
    HttpAvailabilityChecker, PostProcessor, SearchLinkStage, VideoLinkStage,
    DEFAULT_SEARCH_KEYWORDS, DEFAULT_UNAVAILABLE_MARKER,
};

/// Declarative description of a [`PostProcessor`].
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub search_links: bool,
    pub search_keywords: Vec<String>,
    pub video_validation: bool,
    pub unavailable_marker: String,
    pub fail_closed: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            search_links: true,
            search_keywords: DEFAULT_SEARCH_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            video_validation: true,
            unavailable_marker: DEFAULT_UNAVAILABLE_MARKER.to_string(),
            fail_closed: true,
        }
    }
}

impl PipelineConfig {
    /// Builds the pipeline: search-link injection first, then video-link validation.
    /// `http` is shared by the availability checker.
    pub fn build(&self, http: reqwest::Client) -> PostProcessor {
        let mut pipeline = PostProcessor::new();
        if self.search_links {
            pipeline = pipeline.add_stage(Arc::new(SearchLinkStage::new(&self.search_keywords)));
        }
        if self.video_validation {
            let checker = HttpAvailabilityChecker::new(http)
                .with_marker(self.unavailable_marker.clone())
                .with_fail_closed(self.fail_closed);
            pipeline = pipeline.add_stage(Arc::new(VideoLinkStage::new(Arc::new(checker))));
        }
        pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builds_both_stages_in_order() {
        let pipeline = PipelineConfig::default().build(reqwest::Client::new());
        assert_eq!(pipeline.stage_names(), vec!["search_link", "video_link"]);
    }

    #[test]
    fn test_disabled_stages_are_skipped() {
        let config = PipelineConfig {
            search_links: false,
            video_validation: false,
            ..PipelineConfig::default()
        };
        assert!(config.build(reqwest::Client::new()).stage_names().is_empty());
    }
}
