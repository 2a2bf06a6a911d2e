//! Configuration schema for tubekit.toml.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the generation service credential.
pub const API_KEY_ENV: &str = "API_KEY";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Generative-language API root.
    pub api_base_url: String,

    /// API key; the `API_KEY` environment variable takes precedence.
    pub api_key: String,

    /// Per-request timeout for generation calls.
    pub request_timeout_secs: u64,

    /// Log level (debug, info, warn, error).
    pub log_level: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://generativelanguage.googleapis.com".into(),
            api_key: String::new(),
            request_timeout_secs: 60,
            log_level: "info".into(),
        }
    }
}

impl ToolkitConfig {
    /// Let a non-blank environment credential replace the file's `api_key`.
    pub fn apply_env_key(&mut self, env_value: Option<String>) {
        if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
    }

    /// The configured credential, if any.
    pub fn api_key(&self) -> Option<&str> {
        Some(self.api_key.as_str()).filter(|k| !k.trim().is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
