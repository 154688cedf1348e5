use std::time::Duration;

pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1";
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
pub const MODELS_PATH: &str = "/models";

pub const DEFAULT_REFERER: &str = "https://vision.diy.com";
pub const DEFAULT_TITLE: &str = "vision.diy";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

pub const CHAT_TEMPERATURE: f64 = 0.7;
pub const CHAT_MAX_TOKENS: u32 = 2000;

pub const CHAT_TIMEOUT: Duration = Duration::from_secs(60);
pub const MODELS_TIMEOUT: Duration = Duration::from_secs(30);

pub const HEADER_REFERER: &str = "http-referer";
pub const HEADER_TITLE: &str = "x-title";

pub const ENV_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_BASE_URL: &str = "OPENROUTER_BASE_URL";
pub const ENV_REFERER: &str = "OPENROUTER_REFERER";
pub const ENV_TITLE: &str = "OPENROUTER_TITLE";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_API_PREFIX: &str = "API_PREFIX";
