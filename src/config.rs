use crate::error::{ImageError, Result};
use std::env;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Env files tried in order; the first one found wins.
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

#[derive(Clone, Default)]
pub struct ImageConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// Hand-written so the key never ends up in a log line.
impl std::fmt::Debug for ImageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ImageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        ImageConfig {
            api_key: read(API_KEY_VAR),
            base_url: read(BASE_URL_VAR),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// A missing key is an authentication failure, raised before any request.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ImageError::Authentication(format!("{} is not set", API_KEY_VAR)))
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }
}

/// Loads the first env file from `ENV_FILES` that exists. Returns its name.
pub fn load_env_file() -> Option<&'static str> {
    ENV_FILES
        .iter()
        .find(|name| dotenv::from_filename(name).is_ok())
        .copied()
}
