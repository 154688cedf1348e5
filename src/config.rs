use crate::constants::{
    CHAT_COMPLETIONS_PATH, CHAT_TIMEOUT, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_REFERER,
    DEFAULT_TITLE, ENV_API_KEY, ENV_API_PREFIX, ENV_BASE_URL, ENV_HOST, ENV_PORT, ENV_REFERER,
    ENV_TITLE, MODELS_PATH, MODELS_TIMEOUT, OPENROUTER_API_URL,
};
use crate::error::ConfigError;
use std::env;
use std::time::Duration;

/// Everything the relay needs to know about its upstream and where to listen.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub referer: String,
    pub title: String,
    pub host: String,
    pub port: u16,
    pub api_prefix: String,
    pub chat_timeout: Duration,
    pub models_timeout: Duration,
}

impl RelayConfig {
    /// Config pointing at `api_base_url` with every other field defaulted.
    pub fn new(api_key: impl Into<String>, api_base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: api_base_url.into(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_prefix: String::new(),
            chat_timeout: CHAT_TIMEOUT,
            models_timeout: MODELS_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(ENV_API_KEY).ok_or(ConfigError::Missing(ENV_API_KEY))?;
        let mut config = Self::new(
            api_key,
            non_empty(ENV_BASE_URL).unwrap_or_else(|| OPENROUTER_API_URL.to_string()),
        );

        if let Some(referer) = non_empty(ENV_REFERER) {
            config.referer = referer;
        }
        if let Some(title) = non_empty(ENV_TITLE) {
            config.title = title;
        }
        if let Some(host) = non_empty(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = non_empty(ENV_PORT) {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                key: ENV_PORT,
                value: port,
            })?;
        }
        if let Some(prefix) = non_empty(ENV_API_PREFIX) {
            config.api_prefix = normalize_prefix(&prefix);
        }

        Ok(config)
    }

    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url_trimmed(), CHAT_COMPLETIONS_PATH)
    }

    pub fn models_url(&self) -> String {
        format!("{}{}", self.base_url_trimmed(), MODELS_PATH)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn base_url_trimmed(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

/// `api/` and `/api/` both become `/api`; `/` becomes empty.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
