//! Chat server config. Loaded from env (after `.env` via dotenvy in the binary).

use anyhow::{Context, Result};
use llm_client::EnvLlmConfig;
use postprocess::PipelineConfig;
use std::env;

pub const DEFAULT_CHAT_PORT: u16 = 3001;
pub const DEFAULT_LOG_FILE: &str = "logs/techbot.log";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// CHAT_PORT
    pub port: u16,
    /// LOG_FILE
    pub log_file: String,
    /// OPENAI_API_KEY, OPENAI_BASE_URL, MODEL
    pub llm: EnvLlmConfig,
    /// HISTORY_LIMIT
    pub history_limit: usize,
    /// PERSONA_FILE (path) or PERSONA_PROMPT (inline); default persona otherwise
    pub persona: String,
    /// LOG_SERVER_URL; `None` when set to `off`
    pub log_server_url: Option<String>,
    /// SEARCH_LINKS, SEARCH_KEYWORDS, VIDEO_VALIDATION, VIDEO_UNAVAILABLE_MARKER, VIDEO_FAIL_CLOSED
    pub pipeline: PipelineConfig,
    /// ASK_POSTPROCESS
    pub ask_postprocess: bool,
}

fn env_bool(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn load_persona() -> Result<String> {
    if let Ok(path) = env::var("PERSONA_FILE") {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read PERSONA_FILE {}", path));
    }
    Ok(env::var("PERSONA_PROMPT")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| prompt::DEFAULT_PERSONA.to_string()))
}

fn load_pipeline() -> PipelineConfig {
    let defaults = PipelineConfig::default();
    let search_keywords = env::var("SEARCH_KEYWORDS")
        .ok()
        .map(|s| {
            s.split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect()
        })
        .unwrap_or(defaults.search_keywords);
    PipelineConfig {
        search_links: env_bool("SEARCH_LINKS", defaults.search_links),
        search_keywords,
        video_validation: env_bool("VIDEO_VALIDATION", defaults.video_validation),
        unavailable_marker: env::var("VIDEO_UNAVAILABLE_MARKER")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.unavailable_marker),
        fail_closed: env_bool("VIDEO_FAIL_CLOSED", defaults.fail_closed),
    }
}

impl ServerConfig {
    /// Load from environment variables. `port` overrides CHAT_PORT if provided.
    pub fn load(port: Option<u16>) -> Result<Self> {
        let llm = EnvLlmConfig::from_env()?;
        let log_server_url = match env::var("LOG_SERVER_URL") {
            Ok(v) if matches!(v.trim(), "" | "off" | "none" | "disabled") => None,
            Ok(v) => Some(v.trim().to_string()),
            Err(_) => Some(activity_log::DEFAULT_LOG_SERVER_URL.to_string()),
        };

        Ok(Self {
            port: port.unwrap_or_else(|| env_parse("CHAT_PORT", DEFAULT_CHAT_PORT)),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()),
            llm,
            history_limit: env_parse("HISTORY_LIMIT", history::DEFAULT_HISTORY_LIMIT),
            persona: load_persona()?,
            log_server_url,
            pipeline: load_pipeline(),
            ask_postprocess: env_bool("ASK_POSTPROCESS", true),
        })
    }

    /// Validate config (LOG_SERVER_URL must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.log_server_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("LOG_SERVER_URL is set but not a valid URL: {}", url_str);
            }
        }
        if self.history_limit == 0 {
            anyhow::bail!("HISTORY_LIMIT must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const VARS: &[&str] = &[
        "CHAT_PORT",
        "LOG_FILE",
        "OPENAI_BASE_URL",
        "MODEL",
        "HISTORY_LIMIT",
        "PERSONA_FILE",
        "PERSONA_PROMPT",
        "LOG_SERVER_URL",
        "SEARCH_LINKS",
        "SEARCH_KEYWORDS",
        "VIDEO_VALIDATION",
        "VIDEO_UNAVAILABLE_MARKER",
        "VIDEO_FAIL_CLOSED",
        "ASK_POSTPROCESS",
    ];

    fn reset_env() {
        for var in VARS {
            env::remove_var(var);
        }
        env::set_var("OPENAI_API_KEY", "sk-test-key");
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        reset_env();

        let config = ServerConfig::load(None).unwrap();

        assert_eq!(config.port, 3001);
        assert_eq!(config.log_file, "logs/techbot.log");
        assert_eq!(config.llm.llm_model, "gpt-4");
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.persona, prompt::DEFAULT_PERSONA);
        assert_eq!(
            config.log_server_url.as_deref(),
            Some("http://localhost:4000/api/log")
        );
        assert!(config.pipeline.search_links);
        assert!(config.pipeline.video_validation);
        assert!(config.pipeline.fail_closed);
        assert_eq!(config.pipeline.unavailable_marker, "Video unavailable");
        assert!(config.ask_postprocess);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        reset_env();
        env::set_var("CHAT_PORT", "8080");
        env::set_var("HISTORY_LIMIT", "4");
        env::set_var("PERSONA_PROMPT", "Be brief.");
        env::set_var("LOG_SERVER_URL", "off");
        env::set_var("SEARCH_KEYWORDS", "reset, , wifi ");
        env::set_var("VIDEO_VALIDATION", "false");
        env::set_var("VIDEO_FAIL_CLOSED", "no");
        env::set_var("ASK_POSTPROCESS", "0");

        let config = ServerConfig::load(Some(9000)).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.history_limit, 4);
        assert_eq!(config.persona, "Be brief.");
        assert!(config.log_server_url.is_none());
        assert_eq!(config.pipeline.search_keywords, vec!["reset", "wifi"]);
        assert!(!config.pipeline.video_validation);
        assert!(!config.pipeline.fail_closed);
        assert!(!config.ask_postprocess);

        reset_env();
    }

    #[test]
    #[serial]
    fn test_persona_file_takes_precedence() {
        reset_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Persona from file").unwrap();
        env::set_var("PERSONA_FILE", file.path());
        env::set_var("PERSONA_PROMPT", "inline persona");

        let config = ServerConfig::load(None).unwrap();
        assert_eq!(config.persona, "Persona from file");

        env::set_var("PERSONA_FILE", "/nonexistent/persona.txt");
        assert!(ServerConfig::load(None).is_err());

        reset_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_log_server_url() {
        reset_env();
        env::set_var("LOG_SERVER_URL", "not a url");

        let config = ServerConfig::load(None).unwrap();
        assert!(config.validate().is_err());

        reset_env();
    }
}
