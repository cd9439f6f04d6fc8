//! A tool backed by a plain synchronous closure.

use async_trait::async_trait;

use crate::{ToolDefinition, ToolError};

use super::Tool;

pub type ToolHandler = Box<dyn Fn(&serde_json::Value) -> Result<String, ToolError> + Send + Sync>;

pub struct FnTool {
    definition: ToolDefinition,
    handler: ToolHandler,
}

impl FnTool {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
        handler: impl Fn(&serde_json::Value) -> Result<String, ToolError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            definition: ToolDefinition {
                name: name.into(),
                description: description.into(),
                parameters,
            },
            handler: Box::new(handler),
        }
    }
}

#[async_trait]
impl Tool for FnTool {
    fn definition(&self) -> ToolDefinition {
        self.definition.clone()
    }

    async fn invoke(&self, arguments: &serde_json::Value) -> Result<String, ToolError> {
        (self.handler)(arguments)
    }
}
