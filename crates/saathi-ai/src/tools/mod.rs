//! Tools the model can call during a turn.
//!
//! A [`Tool`] owns its definition (name, description, argument schema) and
//! an async invoke. The [`ToolRegistry`] is filled at startup and shared
//! read-only by the agent loop.

mod fn_tool;
mod registry;
mod web_search;

use async_trait::async_trait;

use crate::{ToolDefinition, ToolError};

pub use fn_tool::FnTool;
pub use registry::{ToolRegistry, DEFAULT_TOOL_TIMEOUT};
pub use web_search::{SearchResult, WebSearchTool, NO_RESULTS, WEB_SEARCH_TOOL};

#[async_trait]
pub trait Tool: Send + Sync {
    fn definition(&self) -> ToolDefinition;

    /// Run with the model-supplied arguments and return text for the model.
    async fn invoke(&self, arguments: &serde_json::Value) -> Result<String, ToolError>;
}

/// Convert a tool definition to the Ollama `tools` format.
pub fn to_ollama_tool(tool: &ToolDefinition) -> serde_json::Value {
    serde_json::json!({
        "type": "function",
        "function": {
            "name": tool.name,
            "description": tool.description,
            "parameters": tool.parameters,
        },
    })
}
