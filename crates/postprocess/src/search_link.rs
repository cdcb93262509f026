//! Keyword-triggered search-link injection.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::info;

use crate::ResponseStage;

/// Keywords that indicate the user wants a how-to guide.
pub const DEFAULT_SEARCH_KEYWORDS: &[&str] = &[
    "how to",
    "how do i",
    "installation",
    "install",
    "set up",
    "setup",
    "step by step",
];

/// Phrase prepended to the user's text to form the search query.
pub const SEARCH_QUERY_PREFIX: &str = "step by step guide for ";

/// Anchor text of the injected link.
pub const SEARCH_LINK_TEXT: &str = "View Step-by-Step Guide on Google";

const SEARCH_BASE_URL: &str = "https://www.google.com/search?q=";

/// Same unreserved set as JavaScript's `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the Google search URL for the user's text.
pub fn build_search_url(user_text: &str) -> String {
    let query = format!("{}{}", SEARCH_QUERY_PREFIX, user_text.trim());
    format!(
        "{}{}",
        SEARCH_BASE_URL,
        utf8_percent_encode(&query, QUERY_COMPONENT)
    )
}

/// Appends one search link (opening in a new tab) when the user text contains any keyword.
#[derive(Debug, Clone)]
pub struct SearchLinkStage {
    /// Lower-cased keywords.
    keywords: Vec<String>,
}

impl SearchLinkStage {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// First keyword found in `user_text` (case-insensitive substring), if any.
    pub fn matched_keyword(&self, user_text: &str) -> Option<&str> {
        let lowered = user_text.to_lowercase();
        self.keywords
            .iter()
            .find(|k| lowered.contains(k.as_str()))
            .map(String::as_str)
    }
}

impl Default for SearchLinkStage {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_KEYWORDS)
    }
}

#[async_trait]
impl ResponseStage for SearchLinkStage {
    fn name(&self) -> &'static str {
        "search_link"
    }

    async fn apply(&self, user_text: &str, response: String) -> String {
        let Some(keyword) = self.matched_keyword(user_text) else {
            return response;
        };
        info!(keyword = %keyword, "Search keyword matched, injecting search link");
        format!(
            "{}\n\n<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            response,
            build_search_url(user_text),
            SEARCH_LINK_TEXT
        )
    }
}
