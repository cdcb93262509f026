//! Sidecar config from env.

use std::env;

pub const DEFAULT_LOG_SERVER_PORT: u16 = 4000;
pub const DEFAULT_DATABASE_URL: &str = "./logs.db";

#[derive(Debug, Clone)]
pub struct LogServerConfig {
    /// LOG_SERVER_PORT, falling back to PORT
    pub port: u16,
    /// DATABASE_URL
    pub database_url: String,
}

impl LogServerConfig {
    /// Loads from env; explicit arguments (CLI flags) win over env.
    pub fn load(port: Option<u16>, database_url: Option<String>) -> Self {
        let port = port.unwrap_or_else(|| {
            ["LOG_SERVER_PORT", "PORT"]
                .iter()
                .find_map(|name| env::var(name).ok().and_then(|v| v.trim().parse().ok()))
                .unwrap_or(DEFAULT_LOG_SERVER_PORT)
        });
        let database_url = database_url
            .or_else(|| env::var("DATABASE_URL").ok())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        Self { port, database_url }
    }
}
