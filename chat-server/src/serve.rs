//! Wires the collaborators from [`ServerConfig`] and serves the router until Ctrl-C.

use activity_log::{ActivityLogger, HttpActivityLogger, NoopActivityLogger};
use anyhow::Result;
use history::HistoryStore;
use llm_client::OpenAILlmClient;
use openai_client::mask_token;
use std::sync::Arc;
use tracing::info;

use crate::config::ServerConfig;
use crate::routes::router;
use crate::state::AppState;

/// Builds the application state from config.
pub fn build_state(config: &ServerConfig) -> AppState {
    let http = reqwest::Client::new();

    let llm = Arc::new(OpenAILlmClient::from_config(&config.llm));
    let activity_logger: Arc<dyn ActivityLogger> = match &config.log_server_url {
        Some(url) => Arc::new(HttpActivityLogger::new(http.clone(), url.clone())),
        None => Arc::new(NoopActivityLogger),
    };

    AppState::new(llm, activity_logger)
        .with_history(HistoryStore::new(config.history_limit))
        .with_post_processor(config.pipeline.build(http))
        .with_persona(config.persona.clone())
        .with_ask_postprocess(config.ask_postprocess)
}

/// Binds `0.0.0.0:{port}` and serves until Ctrl-C.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    config.validate()?;
    let state = build_state(&config);

    info!(
        port = config.port,
        model = %config.llm.llm_model,
        api_key = %mask_token(&config.llm.openai_api_key),
        history_limit = state.history.limit(),
        stages = ?state.post_processor.stage_names(),
        log_server_url = ?config.log_server_url,
        "Starting chat server"
    );

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("chat server listening on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("received shutdown signal");
        })
        .await?;
    Ok(())
}
