use std::env;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Quiet period before a typed prefix triggers an autocomplete request
    pub debounce_ms: u64,
}

impl LookupConfig {
    pub fn new() -> Self {
        let debounce_ms = env::var("SUGGEST_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500);

        Self { debounce_ms }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new()
    }
}
