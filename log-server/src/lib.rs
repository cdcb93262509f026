//! # log-server
//!
//! Sidecar that receives user activity from the chat server and appends it to SQLite.
//! One route: `POST /api/log`.

pub mod config;
pub mod error;
pub mod routes;

pub use config::LogServerConfig;
pub use error::ApiError;
pub use routes::{router, LogRequest};

use anyhow::Result;
use storage::LogRepository;
use tracing::info;

/// Opens the database, binds `0.0.0.0:{port}` and serves until Ctrl-C.
pub async fn run_server(config: LogServerConfig) -> Result<()> {
    let repo = LogRepository::new(&config.database_url).await?;
    info!(
        port = config.port,
        database_url = %config.database_url,
        "Starting log server"
    );

    let app = router(repo);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("log server listening on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("received shutdown signal");
        })
        .await?;
    Ok(())
}
