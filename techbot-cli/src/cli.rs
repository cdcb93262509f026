//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "techbot")]
#[command(about = "Tech-help assistant: chat server and logging sidecar", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the chat server (config from env; --port overrides CHAT_PORT).
    Chat {
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run the logging sidecar (--port overrides LOG_SERVER_PORT / PORT).
    LogServer {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(long)]
        database_url: Option<String>,
    },
}
