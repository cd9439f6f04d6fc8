//! Scripted model and tools for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::tools::FnTool;
use crate::{
    Message, ModelClient, ModelError, ModelReply, ModelResponse, TokenUsage, ToolCallRequest,
    ToolDefinition, ToolRegistry,
};

enum Script {
    Queue(VecDeque<ModelReply>),
    Loop(ModelReply),
    Fail(Option<ModelError>),
}

/// Replays canned replies and records what it was sent.
pub struct ScriptedModel {
    script: Mutex<Script>,
    seen: Mutex<Vec<Vec<Message>>>,
    offered: Mutex<Vec<String>>,
    delay: Duration,
}

impl ScriptedModel {
    fn with_script(script: Script) -> Self {
        Self {
            script: Mutex::new(script),
            seen: Mutex::new(Vec::new()),
            offered: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    pub fn new(replies: Vec<ModelReply>) -> Self {
        Self::with_script(Script::Queue(replies.into()))
    }

    /// Returns the same reply forever.
    pub fn looping(reply: ModelReply) -> Self {
        Self::with_script(Script::Loop(reply))
    }

    pub fn failing(err: ModelError) -> Self {
        Self::with_script(Script::Fail(Some(err)))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn usage_per_call() -> TokenUsage {
        TokenUsage {
            input_tokens: 10,
            output_tokens: 2,
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn seen(&self) -> Vec<Vec<Message>> {
        self.seen.lock().unwrap().clone()
    }

    pub fn offered_tools(&self) -> Vec<String> {
        self.offered.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedModel {
    async fn send(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<ModelResponse, ModelError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        *self.offered.lock().unwrap() = tools.iter().map(|t| t.name.clone()).collect();

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let reply = match &mut *self.script.lock().unwrap() {
            Script::Queue(queue) => queue
                .pop_front()
                .ok_or_else(|| ModelError::Api("script exhausted".into()))?,
            Script::Loop(reply) => reply.clone(),
            Script::Fail(err) => {
                return Err(err
                    .take()
                    .unwrap_or_else(|| ModelError::Api("already failed".into())))
            }
        };

        Ok(ModelResponse {
            reply,
            usage: Self::usage_per_call(),
        })
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

pub fn search_call(query: &str) -> ModelReply {
    ModelReply::ToolCalls {
        content: String::new(),
        calls: vec![ToolCallRequest::new(
            "web_search",
            serde_json::json!({ "query": query }),
        )],
    }
}

/// A registry whose `web_search` answers `results for <query>`.
pub fn echo_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry
        .register(std::sync::Arc::new(FnTool::new(
            "web_search",
            "Fake search",
            serde_json::json!({"type": "object", "properties": {"query": {"type": "string"}}}),
            |args| Ok(format!("results for {}", args["query"].as_str().unwrap_or(""))),
        )))
        .unwrap();
    registry
}
