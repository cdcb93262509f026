//! Video-link validation: dead links are replaced in place with a plain-text notice.

use async_trait::async_trait;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::info;

use crate::{Availability, AvailabilityChecker, ResponseStage};

/// Replaces a video URL that no longer resolves.
pub const VIDEO_FALLBACK_NOTICE: &str =
    "(This video is no longer available. Try searching YouTube for a similar guide.)";

static VIDEO_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?://(?:www\.|m\.)?(?:youtube\.com/watch\?v=|youtu\.be/)[A-Za-z0-9_-]+(?:[?&][A-Za-z0-9_=&%.-]*)?",
    )
    .expect("Invalid video URL regex")
});

/// Byte spans of every video URL in `text`. A trailing sentence period is not part of the URL.
fn video_link_spans(text: &str) -> Vec<(usize, usize)> {
    VIDEO_URL_REGEX
        .find_iter(text)
        .map(|m| {
            let url = m.as_str().trim_end_matches('.');
            (m.start(), m.start() + url.len())
        })
        .collect()
}

/// Distinct video URLs in `text`, in order of first appearance.
pub fn find_video_links(text: &str) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for (start, end) in video_link_spans(text) {
        let url = &text[start..end];
        if !links.iter().any(|l| l == url) {
            links.push(url.to_string());
        }
    }
    links
}

/// Rebuilds `text` with each occurrence whose whole URL is in `dead` replaced by the notice.
fn replace_dead_links(text: &str, dead: &[String]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, end) in video_link_spans(text) {
        if dead.iter().any(|d| d == &text[start..end]) {
            out.push_str(&text[last..start]);
            out.push_str(VIDEO_FALLBACK_NOTICE);
            last = end;
        }
    }
    out.push_str(&text[last..]);
    out
}

/// Checks every video link in the response, one after another, and replaces dead ones.
#[derive(Clone)]
pub struct VideoLinkStage {
    checker: Arc<dyn AvailabilityChecker>,
}

impl VideoLinkStage {
    pub fn new(checker: Arc<dyn AvailabilityChecker>) -> Self {
        Self { checker }
    }
}

#[async_trait]
impl ResponseStage for VideoLinkStage {
    fn name(&self) -> &'static str {
        "video_link"
    }

    async fn apply(&self, _user_text: &str, response: String) -> String {
        let links = find_video_links(&response);
        if links.is_empty() {
            return response;
        }

        let mut dead = Vec::new();
        for url in links {
            if self.checker.check(&url).await == Availability::Unavailable {
                dead.push(url);
            }
        }
        if dead.is_empty() {
            return response;
        }

        info!(count = dead.len(), "Replacing unavailable video links");
        replace_dead_links(&response, &dead)
    }
}
