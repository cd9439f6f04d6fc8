//! Front-end entry point: one user message in, one reply out.

use saathi_common::{new_correlation_id, SessionId};
use tracing::{info, warn};

use crate::{AgentError, AgentLoop, Message, SessionError, SessionStore, TokenTracker};

/// Spoken when the model keeps asking for tools past the round cap.
pub const FALLBACK_LOOP_EXCEEDED: &str =
    "Sorry, I could not finish working that out. Could you ask me in a different way?";

/// Spoken when the model cannot be reached or its reply is unreadable or blank.
pub const FALLBACK_MODEL_ERROR: &str = "Sorry, I couldn't generate a response.";

pub struct ChatFacade {
    store: SessionStore,
    agent: AgentLoop,
}

impl ChatFacade {
    pub fn new(store: SessionStore, agent: AgentLoop) -> Self {
        Self { store, agent }
    }

    /// Run one turn and return the assistant's reply.
    ///
    /// Creates the session on first use. Turns on the same session are
    /// serialized. Model failures, blank answers and runaway tool loops come
    /// back as a fixed apology that is stored in history like any other
    /// reply; the intermediate tool messages of a failed turn are dropped,
    /// but the model calls it made still count toward the session's usage.
    pub async fn respond(&self, session_id: &SessionId, user_text: &str) -> String {
        let turn_id = new_correlation_id();
        let handle = self.store.get_or_create(session_id).await;
        let mut session = handle.lock().await;

        info!(
            session = %session_id,
            turn = %turn_id,
            chars = user_text.chars().count(),
            "turn started"
        );
        session.push(Message::user(user_text));

        let outcome = self.agent.run(session.messages()).await;
        let model = self.agent.model_name();
        let reply = match outcome {
            Ok(turn) => {
                info!(
                    session = %session_id,
                    turn = %turn_id,
                    rounds = turn.rounds,
                    tokens = turn.usage.total_tokens(),
                    "turn finished"
                );
                session
                    .tracker_mut()
                    .record(model, &turn.usage, u64::from(turn.rounds));
                if !turn.reply.trim().is_empty() {
                    session.extend(turn.messages);
                    return turn.reply;
                }
                warn!(session = %session_id, turn = %turn_id, "model returned an empty reply");
                FALLBACK_MODEL_ERROR
            }
            Err(e) => {
                session
                    .tracker_mut()
                    .record(model, &e.usage(), u64::from(e.rounds()));
                match e {
                    AgentError::LoopExceeded { rounds, .. } => {
                        warn!(session = %session_id, turn = %turn_id, rounds, "no answer within round cap");
                        FALLBACK_LOOP_EXCEEDED
                    }
                    AgentError::Model { source, .. } => {
                        warn!(session = %session_id, turn = %turn_id, "model error: {source}");
                        FALLBACK_MODEL_ERROR
                    }
                }
            }
        };

        session.push(Message::assistant(reply));
        reply.to_string()
    }

    pub async fn history(&self, session_id: &SessionId) -> Result<Vec<Message>, SessionError> {
        self.store.history(session_id).await
    }

    pub async fn usage(&self, session_id: &SessionId) -> Result<TokenTracker, SessionError> {
        let handle = self.store.get(session_id).await?;
        let session = handle.lock().await;
        Ok(session.tracker().clone())
    }

    pub async fn sessions(&self) -> Vec<SessionId> {
        self.store.ids().await
    }

    pub fn agent(&self) -> &AgentLoop {
        &self.agent
    }
}
