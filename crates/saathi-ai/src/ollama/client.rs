//! Ollama client struct, request building, and response parsing.

use std::time::Duration;

use crate::tools::to_ollama_tool;
use crate::{Message, ModelError, ModelReply, ModelResponse, TokenUsage, ToolCallRequest, ToolDefinition};

use super::config::OllamaConfig;

pub struct OllamaClient {
    pub(crate) config: OllamaConfig,
    pub(crate) http: reqwest::Client,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ModelError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Build the JSON request body for `/api/chat`.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> serde_json::Value {
        let msgs: Vec<_> = messages.iter().map(to_wire_message).collect();

        let mut body = serde_json::json!({
            "model": self.config.model,
            "messages": msgs,
            "stream": false,
            "options": {
                "temperature": self.config.temperature,
                "top_p": self.config.top_p,
            },
        });

        if !tools.is_empty() {
            let tool_defs: Vec<_> = tools.iter().map(to_ollama_tool).collect();
            body["tools"] = serde_json::json!(tool_defs);
        }

        body
    }

    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<ModelResponse, ModelError> {
        if let Some(err) = json["error"].as_str() {
            return Err(ModelError::Api(err.to_string()));
        }

        let message = json
            .get("message")
            .ok_or_else(|| ModelError::Parse("response has no message".into()))?;
        let content = message["content"].as_str().unwrap_or("").to_string();

        let mut calls = Vec::new();
        if let Some(raw_calls) = message["tool_calls"].as_array() {
            for raw in raw_calls {
                let name = raw["function"]["name"].as_str().unwrap_or("");
                if name.is_empty() {
                    return Err(ModelError::Parse("tool call without a function name".into()));
                }
                calls.push(ToolCallRequest::new(
                    name,
                    decode_arguments(&raw["function"]["arguments"]),
                ));
            }
        }

        let usage = TokenUsage {
            input_tokens: json["prompt_eval_count"].as_u64().unwrap_or(0),
            output_tokens: json["eval_count"].as_u64().unwrap_or(0),
        };

        let reply = if calls.is_empty() {
            ModelReply::Final(content)
        } else {
            ModelReply::ToolCalls { content, calls }
        };

        Ok(ModelResponse { reply, usage })
    }
}

fn to_wire_message(msg: &Message) -> serde_json::Value {
    let mut wire = serde_json::json!({
        "role": msg.role.as_str(),
        "content": msg.content,
    });
    if !msg.tool_calls.is_empty() {
        let calls: Vec<_> = msg
            .tool_calls
            .iter()
            .map(|call| {
                serde_json::json!({
                    "function": { "name": call.name, "arguments": call.arguments }
                })
            })
            .collect();
        wire["tool_calls"] = serde_json::json!(calls);
    }
    if let Some(ref tool) = msg.tool_name {
        wire["tool_name"] = serde_json::json!(tool);
    }
    wire
}

/// Some models send arguments as a JSON-encoded string instead of an object.
fn decode_arguments(raw: &serde_json::Value) -> serde_json::Value {
    match raw {
        serde_json::Value::Null => serde_json::json!({}),
        serde_json::Value::String(s) => {
            serde_json::from_str(s).unwrap_or_else(|_| serde_json::Value::String(s.clone()))
        }
        other => other.clone(),
    }
}

/// Model names from a `/api/tags` response.
pub(crate) fn parse_model_tags(json: &serde_json::Value) -> Vec<String> {
    json["models"]
        .as_array()
        .map(|models| {
            models
                .iter()
                .filter_map(|m| m["name"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
