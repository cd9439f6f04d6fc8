//! Local model backend settings.

use serde::{Deserialize, Serialize};

/// Ollama model and sampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model tag as known to Ollama (e.g. `llama3.1`, `mistral-nemo`).
    pub name: String,
    pub base_url: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Nucleus sampling cutoff (valid range: 0.0-1.0).
    pub top_p: f64,
    /// Whole-request timeout in seconds (valid range: 5-600).
    pub request_timeout_secs: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "llama3.1".into(),
            base_url: "http://127.0.0.1:11434".into(),
            temperature: 0.0,
            top_p: 0.0,
            request_timeout_secs: 120,
        }
    }
}
