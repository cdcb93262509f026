//! # Prompt
//!
//! Builds the ordered message list sent to the completion service.
//!
//! ## Layout
//!
//! - **System**: the persona instruction, always first.
//! - **Turns**: either the user's bounded history in chronological order, or one ad-hoc question.
//!
//! No truncation happens here; the history store already bounds the number of turns.

mod persona;

pub use persona::DEFAULT_PERSONA;

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Builds a stateful conversation: persona first, then `history` in its original order.
///
/// # Arguments
///
/// * `persona` - Fixed instruction text defining the assistant's tone and behaviour
/// * `history` - Prior turns of one user, oldest first (already bounded by the history store)
pub fn build_conversation<I>(persona: &str, history: I) -> Vec<ChatMessage>
where
    I: IntoIterator<Item = ChatMessage>,
{
    let history = history.into_iter();
    let mut messages = Vec::with_capacity(1 + history.size_hint().0);
    messages.push(ChatMessage::system(persona));
    messages.extend(history);
    messages
}

/// Builds a stateless, single-turn conversation: persona, then one user question.
pub fn build_single_turn(persona: &str, question: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(persona), ChatMessage::user(question)]
}
