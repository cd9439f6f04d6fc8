//! The model/tool loop for a single user turn.
//!
//! Each round sends the working history to the model. A final answer ends
//! the turn. A tool-call reply appends one assistant request message, then
//! one tool message per call (output or error report), and goes around
//! again. The round cap counts model calls.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{AgentError, Message, ModelClient, ModelReply, TokenUsage, ToolRegistry};

pub const DEFAULT_MAX_ROUNDS: u32 = 5;

/// Result of a completed turn.
#[derive(Debug, Clone)]
pub struct AgentTurn {
    pub reply: String,
    /// Messages produced this turn, in order, ending with the final
    /// assistant message. The user message is not included.
    pub messages: Vec<Message>,
    /// Model calls made.
    pub rounds: u32,
    pub usage: TokenUsage,
}

pub struct AgentLoop {
    client: Arc<dyn ModelClient>,
    tools: Arc<ToolRegistry>,
    max_rounds: u32,
}

impl AgentLoop {
    pub fn new(client: Arc<dyn ModelClient>, tools: Arc<ToolRegistry>) -> Self {
        Self {
            client,
            tools,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Values below 1 are treated as 1.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds.max(1);
        self
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Drive the model to a final answer for `history`, which must already
    /// end with the user message.
    pub async fn run(&self, history: &[Message]) -> Result<AgentTurn, AgentError> {
        let definitions = self.tools.definitions();
        let mut working = history.to_vec();
        let mut produced = Vec::new();
        let mut usage = TokenUsage::default();

        for round in 1..=self.max_rounds {
            debug!(round, messages = working.len(), model = %self.client.model_name(), "model call");
            let response = match self.client.send(&working, &definitions).await {
                Ok(response) => response,
                Err(source) => {
                    return Err(AgentError::Model {
                        source,
                        rounds: round - 1,
                        usage,
                    })
                }
            };
            usage.add(&response.usage);

            let (content, calls) = match response.reply {
                ModelReply::Final(text) => return Ok(finish(text, produced, round, usage)),
                ModelReply::ToolCalls { content, calls } => (content, calls),
            };

            if self.tools.is_empty() || calls.is_empty() {
                // nothing can run, so whatever text came with the calls is the answer
                debug!(round, "tool calls without tools; treating reply as final");
                return Ok(finish(content, produced, round, usage));
            }

            if round == self.max_rounds {
                warn!(rounds = round, pending = calls.len(), "tool loop hit the round cap");
                break;
            }

            let request = Message::tool_request(content, calls.clone());
            working.push(request.clone());
            produced.push(request);

            for call in &calls {
                let output = match self.tools.invoke(&call.name, &call.arguments).await {
                    Ok(output) => {
                        debug!(tool = %call.name, bytes = output.len(), "tool ok");
                        output
                    }
                    Err(e) => {
                        warn!(tool = %call.name, kind = e.kind(), "tool failed: {e}");
                        e.to_feedback()
                    }
                };
                let result = Message::tool_result(&call.name, output);
                working.push(result.clone());
                produced.push(result);
            }
        }

        Err(AgentError::LoopExceeded {
            rounds: self.max_rounds,
            usage,
        })
    }
}

fn finish(reply: String, mut produced: Vec<Message>, rounds: u32, usage: TokenUsage) -> AgentTurn {
    produced.push(Message::assistant(reply.clone()));
    AgentTurn {
        reply,
        messages: produced,
        rounds,
        usage,
    }
}
