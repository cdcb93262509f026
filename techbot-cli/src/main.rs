//! techbot CLI: run the chat server or the logging sidecar. Config from env and optional CLI args.

use anyhow::Result;
use chat_server::{config::DEFAULT_LOG_FILE, ServerConfig};
use clap::Parser;
use log_server::LogServerConfig;
use techbot_cli::{Cli, Commands};
use techbot_core::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { port } => {
            let config = ServerConfig::load(port)?;
            init_tracing(&config.log_file)?;
            chat_server::run_server(config).await
        }
        Commands::LogServer { port, database_url } => {
            let log_file =
                std::env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
            init_tracing(&log_file)?;
            let config = LogServerConfig::load(port, database_url);
            log_server::run_server(config).await
        }
    }
}
