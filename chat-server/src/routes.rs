//! Routes: `GET /`, `POST /api/chat` (stateful) and `GET /api/chat` (stateless).

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use techbot_core::{LogEntry, TechbotError, DEFAULT_USER_ID};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;
use prompt::ChatMessage;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub user_id: Option<String>,
}

/// Response of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub assistant: String,
}

/// Query of `GET /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct AskParams {
    pub question: Option<String>,
}

/// Builds the router with permissive CORS and HTTP tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/chat", get(ask).post(submit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Returns the value if it is present and not blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Stateful chat turn. Validation happens before any side effect.
#[instrument(skip(state, payload))]
async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let missing = || TechbotError::MissingInput("Missing message");
    let Json(request) = payload.map_err(|_| missing())?;
    let message = non_blank(request.message).ok_or_else(missing)?;
    let user_id = non_blank(request.user_id).unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    info!(
        user_id = %user_id,
        message_len = message.len(),
        "step: chat message received"
    );

    activity_log::dispatch(
        state.activity_logger.clone(),
        LogEntry::now(user_id.clone(), message.clone()),
    );

    state
        .history
        .append(&user_id, ChatMessage::user(message.clone()))
        .await;
    let conversation =
        prompt::build_conversation(&state.persona, state.history.get(&user_id).await);
    info!(
        user_id = %user_id,
        conversation_len = conversation.len(),
        "step: conversation assembled"
    );

    let completion = state
        .llm
        .complete(conversation)
        .await
        .map_err(|e| TechbotError::Upstream(e.to_string()))?;
    let assistant = state.post_processor.run(&message, completion).await;

    state
        .history
        .append(&user_id, ChatMessage::assistant(assistant.clone()))
        .await;
    info!(
        user_id = %user_id,
        reply_len = assistant.len(),
        "step: chat reply ready"
    );

    Ok(Json(ChatResponse { assistant }))
}

/// Stateless single question; answers with the raw text.
#[instrument(skip(state, params))]
async fn ask(
    State(state): State<AppState>,
    params: Result<Query<AskParams>, QueryRejection>,
) -> Result<String, ApiError> {
    let missing = || TechbotError::MissingInput("Missing query parameter: question");
    let Query(params) = params.map_err(|_| missing())?;
    let question = non_blank(params.question).ok_or_else(missing)?;

    info!(question_len = question.len(), "step: direct question received");

    let conversation = prompt::build_single_turn(&state.persona, &question);
    let completion = state
        .llm
        .complete(conversation)
        .await
        .map_err(|e| TechbotError::Upstream(e.to_string()))?;

    if state.ask_postprocess {
        Ok(state.post_processor.run(&question, completion).await)
    } else {
        Ok(completion)
    }
}
