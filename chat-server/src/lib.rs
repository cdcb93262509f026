//! # chat-server
//!
//! Request handlers for the assistant: a static chat page, a stateful `POST /api/chat` and a
//! stateless `GET /api/chat?question=...`. Collaborators (completion client, history store,
//! post-processor, activity logger) are injected through [`AppState`].

pub mod config;
pub mod error;
pub mod routes;
pub mod serve;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{router, AskParams, ChatRequest, ChatResponse};
pub use serve::run_server;
pub use state::AppState;
