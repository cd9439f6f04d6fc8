//! Session state.

use chrono::{DateTime, Utc};
use saathi_common::SessionId;

use crate::token_tracker::TokenTracker;
use crate::{Message, Role};

pub struct Session {
    id: SessionId,
    messages: Vec<Message>,
    created_at: DateTime<Utc>,
    tracker: TokenTracker,
}

impl Session {
    pub(crate) fn new(id: SessionId, system_prompt: String) -> Self {
        Self {
            id,
            messages: vec![Message::system(system_prompt)],
            created_at: Utc::now(),
            tracker: TokenTracker::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Full history, system prompt first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Most recent assistant answer (tool requests excluded).
    pub fn last_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant && !m.is_tool_request())
            .map(|m| m.content.as_str())
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    pub(crate) fn tracker_mut(&mut self) -> &mut TokenTracker {
        &mut self.tracker
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(crate) fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.messages.extend(messages);
    }
}
