//! # History store
//!
//! Per-user, size-bounded conversation history held in memory.
//!
//! ## Semantics
//!
//! - Each user id maps to an ordered list of [`ChatMessage`]s, oldest first.
//! - The list never exceeds `limit`; appending past the limit drops the oldest entries (FIFO).
//! - Lists are created lazily on first append and live until the process stops.
//!
//! ## Concurrency
//!
//! Single operations go through an `Arc<RwLock<>>` and are memory-safe. A request that reads
//! the history, awaits the model, then appends the reply is not atomic: two concurrent requests
//! for the same user id may interleave their turns.

use prompt::ChatMessage;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Default number of messages kept per user.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// In-memory history keyed by user id. Cheap to clone; clones share the same map.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<ChatMessage>>>>,
    limit: usize,
}

impl HistoryStore {
    /// Creates an empty store keeping at most `limit` messages per user (minimum 1).
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            limit: limit.max(1),
        }
    }

    /// Maximum number of messages kept per user.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Appends `message` to the user's history, then evicts the oldest entries beyond the limit.
    pub async fn append(&self, user_id: &str, message: ChatMessage) {
        let mut entries = self.entries.write().await;
        let history = entries.entry(user_id.to_string()).or_default();
        history.push(message);
        if history.len() > self.limit {
            let overflow = history.len() - self.limit;
            history.drain(..overflow);
            debug!(user_id = %user_id, evicted = overflow, "History limit reached, oldest evicted");
        }
    }

    /// Returns a snapshot of the user's history, oldest first. Unknown users get an empty list.
    pub async fn get(&self, user_id: &str) -> Vec<ChatMessage> {
        let entries = self.entries.read().await;
        entries.get(user_id).cloned().unwrap_or_default()
    }

    /// Number of messages currently held for the user.
    pub async fn len(&self, user_id: &str) -> usize {
        let entries = self.entries.read().await;
        entries.get(user_id).map(Vec::len).unwrap_or(0)
    }

    /// True if the user has no history.
    pub async fn is_empty(&self, user_id: &str) -> bool {
        self.len(user_id).await == 0
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
