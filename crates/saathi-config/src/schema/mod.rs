//! Configuration schema types for Saathi.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the assistant ships with.

mod agent;
mod model;
mod speech;
mod system;
mod tools;

pub use agent::*;
pub use model::*;
pub use speech::*;
pub use system::*;
pub use tools::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Saathi.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaathiConfig {
    pub model: ModelConfig,
    pub agent: AgentConfig,
    pub tools: ToolsConfig,
    pub speech: SpeechConfig,
    pub logging: LoggingConfig,
}
