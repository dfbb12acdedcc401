//! Settings for the stored-messages backend
//!
//! The store URL is resolved in this order:
//! 1. `redis_url` in ~/.config/stored-messages/settings.json
//! 2. The `STORED_MESSAGES_REDIS_URL` environment variable
//! 3. The default local Redis URL

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Settings filename in the config directory
const SETTINGS_FILE: &str = "settings.json";

/// Environment variable overriding the store URL
const REDIS_URL_ENV: &str = "STORED_MESSAGES_REDIS_URL";

/// Store URL used when nothing is configured
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379/0";

/// URL schemes the Redis client understands
const SUPPORTED_SCHEMES: &[&str] = &["redis", "rediss", "redis+unix", "unix"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessagesSettings {
    /// Connection URL of the key-value store
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
}

fn default_redis_url() -> String {
    DEFAULT_REDIS_URL.to_string()
}

impl Default for StoredMessagesSettings {
    fn default() -> Self {
        Self {
            redis_url: default_redis_url(),
        }
    }
}

impl StoredMessagesSettings {
    /// Load settings from the config file, the environment, or defaults
    pub fn load() -> Result<Self> {
        if config::config_exists(SETTINGS_FILE) {
            let settings: Self = config::load_json(SETTINGS_FILE)?;
            settings.validate()?;
            return Ok(settings);
        }

        Ok(Self::from_env_or_default())
    }

    /// Load settings from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings: Self = config::load_json_file(path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(json).context("Failed to parse settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Settings from `STORED_MESSAGES_REDIS_URL`, falling back to the default
    pub fn from_env_or_default() -> Self {
        match config::env_var(REDIS_URL_ENV) {
            Some(redis_url) => Self { redis_url },
            None => Self::default(),
        }
    }

    /// Check that the store URL parses and uses a Redis scheme
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.redis_url)
            .with_context(|| format!("Invalid store URL: {}", redact_url(&self.redis_url)))?;
        if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
            bail!("Unsupported store URL scheme: {}", url.scheme());
        }
        Ok(())
    }
}

/// Render a store URL without its credentials, for errors and logs
///
/// A URL that does not parse is not echoed at all, since there is no way to
/// tell which part of it is secret.
pub fn redact_url(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return "<unparseable url>".to_string();
    };
    if url.password().is_some() {
        let _ = url.set_password(None);
    }
    if !url.username().is_empty() {
        let _ = url.set_username("");
    }
    url.to_string()
}
