//! Shared application state handed to every route.

use activity_log::ActivityLogger;
use history::HistoryStore;
use llm_client::LlmClient;
use postprocess::PostProcessor;
use std::sync::Arc;

/// Everything a request needs. Cloned per request; clones share the same collaborators.
#[derive(Clone)]
pub struct AppState {
    pub history: HistoryStore,
    pub llm: Arc<dyn LlmClient>,
    pub post_processor: Arc<PostProcessor>,
    pub activity_logger: Arc<dyn ActivityLogger>,
    pub persona: Arc<str>,
    /// Whether `GET /api/chat` answers go through the post-processor.
    pub ask_postprocess: bool,
}

impl AppState {
    /// State with default history, an empty pipeline, and the default persona.
    pub fn new(llm: Arc<dyn LlmClient>, activity_logger: Arc<dyn ActivityLogger>) -> Self {
        Self {
            history: HistoryStore::default(),
            llm,
            post_processor: Arc::new(PostProcessor::new()),
            activity_logger,
            persona: Arc::from(prompt::DEFAULT_PERSONA),
            ask_postprocess: true,
        }
    }

    pub fn with_history(mut self, history: HistoryStore) -> Self {
        self.history = history;
        self
    }

    pub fn with_post_processor(mut self, post_processor: PostProcessor) -> Self {
        self.post_processor = Arc::new(post_processor);
        self
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = Arc::from(persona.into());
        self
    }

    pub fn with_ask_postprocess(mut self, enabled: bool) -> Self {
        self.ask_postprocess = enabled;
        self
    }
}
