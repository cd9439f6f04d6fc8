//! Agent loop settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Maximum model calls per user turn (valid range: 1-20).
    pub max_rounds: u32,
    /// Replaces the built-in persona prompt when set.
    pub system_prompt: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_rounds: 5,
            system_prompt: None,
        }
    }
}
