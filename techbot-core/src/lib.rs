//! # techbot-core
//!
//! Shared types and plumbing for the tech-help assistant: the [`LogEntry`] exchanged between
//! the chat server and the logging sidecar, the error taxonomy, and tracing initialization.

pub mod error;
pub mod logger;
pub mod types;

pub use error::TechbotError;
pub use logger::init_tracing;
pub use types::{LogEntry, DEFAULT_USER_ID};
