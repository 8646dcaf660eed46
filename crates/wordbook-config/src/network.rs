use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.datamuse.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Base URL of the word-association API
    pub api_base_url: String,
    /// Per-request HTTP timeout in milliseconds
    pub timeout_ms: u64,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let api_base_url =
            env::var("DATAMUSE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_ms = env::var("HTTP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000); // 10 seconds default

        Self {
            api_base_url,
            timeout_ms,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::new()
    }
}
