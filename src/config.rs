use dotenvy::dotenv;
use std::env;

pub const DEFAULT_PROVIDER_URL: &str = "https://google.serper.dev/search";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Process-wide settings, read once at start and handed to the router.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider credential. `None` is not fatal: the search endpoint answers
    /// with a configuration error instead.
    pub provider_api_key: Option<String>,
    pub provider_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Config {
        dotenv().ok(); // Load .env file if present
        Config {
            provider_api_key: get_env_opt("SERP_API"),
            provider_url: get_env_or_default("SERP_API_URL", DEFAULT_PROVIDER_URL),
            bind_addr: get_env_or_default("BIND_ADDR", DEFAULT_BIND_ADDR),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Config {
        self.provider_api_key = Some(key.into());
        self
    }

    pub fn with_provider_url(mut self, url: impl Into<String>) -> Config {
        self.provider_url = url.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            provider_api_key: None,
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

fn get_env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
