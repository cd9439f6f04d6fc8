//! External tool settings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Web search tool settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSearchConfig {
    pub enabled: bool,
    /// Results returned to the model per query (valid range: 1-10).
    pub max_results: u32,
    pub endpoint: String,
    /// Optional credential, sent as a bearer token when present.
    pub api_key: Option<String>,
}

impl fmt::Debug for WebSearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebSearchConfig")
            .field("enabled", &self.enabled)
            .field("max_results", &self.max_results)
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_results: 3,
            endpoint: "https://html.duckduckgo.com/html/".into(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Per-invocation timeout in seconds (valid range: 1-300).
    pub timeout_secs: u32,
    pub web_search: WebSearchConfig,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 20,
            web_search: WebSearchConfig::default(),
        }
    }
}
