//! Error taxonomy for the agent engine.
//!
//! Only [`SessionError`] is fatal to a caller. Tool failures are fed back to
//! the model, and loop/model failures become fallback replies in
//! [`crate::ChatFacade`].

use saathi_common::SessionId;

use crate::TokenUsage;

/// The model backend could not produce a reply.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Timeout")]
    Timeout,
}

impl From<reqwest::Error> for ModelError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ModelError::Timeout
        } else if err.is_decode() {
            ModelError::Parse(err.to_string())
        } else {
            ModelError::Network(err.to_string())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("tool already registered: {0}")]
    Duplicate(String),
    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },
    #[error("{tool} failed: {reason}")]
    Failed { tool: String, reason: String },
    #[error("{tool} timed out after {secs}s")]
    Timeout { tool: String, secs: u64 },
    #[error("{tool} returned an unusable result: {reason}")]
    MalformedResult { tool: String, reason: String },
}

impl ToolError {
    /// Stable machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::UnknownTool(_) => "unknown_tool",
            ToolError::Duplicate(_) => "duplicate_tool",
            ToolError::InvalidArguments { .. } => "invalid_arguments",
            ToolError::Failed { .. } => "tool_failed",
            ToolError::Timeout { .. } => "timeout",
            ToolError::MalformedResult { .. } => "malformed_result",
        }
    }

    pub fn tool(&self) -> &str {
        match self {
            ToolError::UnknownTool(name) | ToolError::Duplicate(name) => name,
            ToolError::InvalidArguments { tool, .. }
            | ToolError::Failed { tool, .. }
            | ToolError::Timeout { tool, .. }
            | ToolError::MalformedResult { tool, .. } => tool,
        }
    }

    /// JSON body of the tool message that reports this error to the model.
    pub fn to_feedback(&self) -> String {
        serde_json::json!({
            "error": {
                "kind": self.kind(),
                "tool": self.tool(),
                "message": self.to_string(),
            }
        })
        .to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown session: {0}")]
    UnknownSession(SessionId),
}

/// A turn that ended without an answer. Both variants carry the model calls
/// that did complete and the tokens they used, so the caller can still
/// account for them.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no final answer after {rounds} model calls")]
    LoopExceeded { rounds: u32, usage: TokenUsage },
    #[error("{source}")]
    Model {
        source: ModelError,
        rounds: u32,
        usage: TokenUsage,
    },
}

impl AgentError {
    /// Model calls that returned a reply before the turn stopped.
    pub fn rounds(&self) -> u32 {
        match self {
            AgentError::LoopExceeded { rounds, .. } | AgentError::Model { rounds, .. } => *rounds,
        }
    }

    pub fn usage(&self) -> TokenUsage {
        match self {
            AgentError::LoopExceeded { usage, .. } | AgentError::Model { usage, .. } => *usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_error_display() {
        assert_eq!(ModelError::RateLimited.to_string(), "Rate limited");
        assert_eq!(ModelError::Timeout.to_string(), "Timeout");
        assert_eq!(
            ModelError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn tool_error_kinds_are_stable() {
        let cases = [
            (ToolError::UnknownTool("x".into()), "unknown_tool"),
            (ToolError::Duplicate("x".into()), "duplicate_tool"),
            (
                ToolError::InvalidArguments {
                    tool: "x".into(),
                    reason: "r".into(),
                },
                "invalid_arguments",
            ),
            (
                ToolError::Failed {
                    tool: "x".into(),
                    reason: "r".into(),
                },
                "tool_failed",
            ),
            (
                ToolError::Timeout {
                    tool: "x".into(),
                    secs: 1,
                },
                "timeout",
            ),
            (
                ToolError::MalformedResult {
                    tool: "x".into(),
                    reason: "r".into(),
                },
                "malformed_result",
            ),
        ];
        for (err, kind) in cases {
            assert_eq!(err.kind(), kind);
            assert_eq!(err.tool(), "x");
        }
    }

    #[test]
    fn feedback_is_parseable_json() {
        let err = ToolError::Timeout {
            tool: "web_search".into(),
            secs: 20,
        };
        let value: serde_json::Value = serde_json::from_str(&err.to_feedback()).unwrap();
        assert_eq!(value["error"]["kind"], "timeout");
        assert_eq!(value["error"]["tool"], "web_search");
        assert_eq!(value["error"]["message"], "web_search timed out after 20s");
    }

    #[test]
    fn agent_error_keeps_partial_accounting() {
        let usage = TokenUsage {
            input_tokens: 30,
            output_tokens: 4,
        };
        let err = AgentError::Model {
            source: ModelError::Api("HTTP 500".into()),
            rounds: 2,
            usage,
        };
        assert_eq!(err.to_string(), "API error: HTTP 500");
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.rounds(), 2);
        assert_eq!(err.usage(), usage);

        let err = AgentError::LoopExceeded {
            rounds: 5,
            usage: TokenUsage::default(),
        };
        assert_eq!(err.to_string(), "no final answer after 5 model calls");
        assert_eq!(err.rounds(), 5);
    }

    #[test]
    fn session_error_names_the_session() {
        let err = SessionError::UnknownSession(SessionId::from("abc"));
        assert_eq!(err.to_string(), "unknown session: abc");
    }
}
