//! `POST /api/log`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use storage::LogRepository;
use techbot_core::LogEntry;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument};

use crate::error::{ApiError, MISSING_FIELDS};

/// Incoming body. Every field is optional here so that absence maps to our own 400.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRequest {
    pub user_id: Option<String>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
}

impl LogRequest {
    /// Validates presence of every field and parses the RFC 3339 timestamp.
    pub fn into_entry(self) -> Result<LogEntry, ApiError> {
        let missing = || ApiError::BadRequest(MISSING_FIELDS.to_string());
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let user_id = present(self.user_id).ok_or_else(missing)?;
        let message = present(self.message).ok_or_else(missing)?;
        let raw = present(self.timestamp).ok_or_else(missing)?;
        let timestamp = DateTime::parse_from_rfc3339(raw.trim())
            .map_err(|_| ApiError::BadRequest(format!("Invalid timestamp: {}", raw)))?
            .with_timezone(&Utc);

        Ok(LogEntry {
            user_id,
            message,
            timestamp,
        })
    }
}

pub fn router(repo: LogRepository) -> Router {
    Router::new()
        .route("/api/log", post(save_log))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(repo)
}

#[instrument(skip(repo, payload))]
async fn save_log(
    State(repo): State<LogRepository>,
    payload: Result<Json<LogRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let entry = request.into_entry()?;

    let id = repo.append(&entry).await?;
    info!(id, user_id = %entry.user_id, "step: log entry stored");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Log saved successfully" })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user_id: Option<&str>, message: Option<&str>, ts: Option<&str>) -> LogRequest {
        LogRequest {
            user_id: user_id.map(String::from),
            message: message.map(String::from),
            timestamp: ts.map(String::from),
        }
    }

    #[test]
    fn test_into_entry_parses_timestamp() {
        let entry = request(Some("u"), Some("hi"), Some("2024-05-01T10:00:00.000Z"))
            .into_entry()
            .unwrap();
        assert_eq!(entry.user_id, "u");
        assert_eq!(entry.timestamp.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }

    #[test]
    fn test_into_entry_rejects_missing_and_blank() {
        let cases = [
            request(None, Some("hi"), Some("2024-05-01T10:00:00Z")),
            request(Some("u"), Some("  "), Some("2024-05-01T10:00:00Z")),
            request(Some("u"), Some("hi"), None),
        ];
        for case in cases {
            match case.into_entry() {
                Err(ApiError::BadRequest(msg)) => assert_eq!(msg, MISSING_FIELDS),
                other => panic!("expected BadRequest, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_into_entry_rejects_bad_timestamp() {
        assert!(matches!(
            request(Some("u"), Some("hi"), Some("yesterday")).into_entry(),
            Err(ApiError::BadRequest(_))
        ));
    }
}
