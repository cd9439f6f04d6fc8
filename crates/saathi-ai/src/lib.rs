//! Conversational agent engine for Saathi.
//!
//! Provides:
//! - An Ollama chat client behind the [`ModelClient`] trait
//! - A tool registry with a DuckDuckGo web search tool
//! - Per-session message history with session-scoped locking
//! - The agent loop that interleaves model calls with tool calls
//! - [`ChatFacade`], the single `respond` entry point for front-ends

pub mod agent;
pub mod chat;
pub mod error;
pub mod ollama;
pub mod prompt;
pub mod session;
pub mod token_tracker;
pub mod tools;

#[cfg(test)]
pub(crate) mod test_support;

use async_trait::async_trait;

pub use agent::{AgentLoop, AgentTurn, DEFAULT_MAX_ROUNDS};
pub use chat::{ChatFacade, FALLBACK_LOOP_EXCEEDED, FALLBACK_MODEL_ERROR};
pub use error::{AgentError, ModelError, SessionError, ToolError};
pub use ollama::{OllamaClient, OllamaConfig};
pub use session::{Session, SessionHandle, SessionStore};
pub use token_tracker::TokenTracker;
pub use tools::{FnTool, Tool, ToolRegistry, WebSearchTool};

/// A chat backend. Returns either a final answer or tool-call requests,
/// never raw text the caller has to scan for tool syntax.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn send(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<ModelResponse, ModelError>;

    /// Model name for logs.
    fn model_name(&self) -> &str {
        "unknown"
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Requests made by the model in this (assistant) message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCallRequest>,
    /// Tool that produced this (tool) message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
}

impl Message {
    fn plain(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_name: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::plain(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::plain(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::plain(Role::Assistant, content)
    }

    /// An assistant turn that asks for tools instead of answering.
    pub fn tool_request(content: impl Into<String>, calls: Vec<ToolCallRequest>) -> Self {
        Self {
            tool_calls: calls,
            ..Self::plain(Role::Assistant, content)
        }
    }

    /// The output (or error report) of one tool call.
    pub fn tool_result(tool: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_name: Some(tool.into()),
            ..Self::plain(Role::Tool, content)
        }
    }

    pub fn is_tool_request(&self) -> bool {
        self.role == Role::Assistant && !self.tool_calls.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::Tool => "tool",
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema for the arguments object.
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolCallRequest {
    pub name: String,
    pub arguments: serde_json::Value,
}

impl ToolCallRequest {
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// What the model decided to do this round.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelReply {
    Final(String),
    ToolCalls {
        /// Text the model emitted alongside the calls, usually empty.
        content: String,
        calls: Vec<ToolCallRequest>,
    },
}

#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub reply: ModelReply,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }

    pub fn add(&mut self, other: &TokenUsage) {
        self.input_tokens = self.input_tokens.saturating_add(other.input_tokens);
        self.output_tokens = self.output_tokens.saturating_add(other.output_tokens);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors_set_roles() {
        assert_eq!(Message::system("s").role, Role::System);
        assert_eq!(Message::user("u").role, Role::User);
        assert_eq!(Message::assistant("a").role, Role::Assistant);

        let tool = Message::tool_result("web_search", "results");
        assert_eq!(tool.role, Role::Tool);
        assert_eq!(tool.tool_name.as_deref(), Some("web_search"));
    }

    #[test]
    fn tool_request_is_detected() {
        let call = ToolCallRequest::new("web_search", serde_json::json!({"query": "news"}));
        let msg = Message::tool_request("", vec![call]);
        assert!(msg.is_tool_request());
        assert!(!Message::assistant("hi").is_tool_request());
    }

    #[test]
    fn plain_message_serializes_without_tool_fields() {
        let json = serde_json::to_value(Message::user("hello")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hello"}));
    }

    #[test]
    fn usage_accumulates_and_saturates() {
        let mut usage = TokenUsage {
            input_tokens: 10,
            output_tokens: 5,
        };
        usage.add(&TokenUsage {
            input_tokens: 1,
            output_tokens: 2,
        });
        assert_eq!(usage.total_tokens(), 18);

        let mut big = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 0,
        };
        big.add(&usage);
        assert_eq!(big.input_tokens, u64::MAX);
    }

    #[test]
    fn role_strings() {
        assert_eq!(Role::Tool.as_str(), "tool");
        assert_eq!(Role::System.as_str(), "system");
    }
}
