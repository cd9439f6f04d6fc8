//! Session table keyed by [`SessionId`].

use std::collections::HashMap;
use std::sync::Arc;

use saathi_common::SessionId;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::{Message, SessionError};

use super::types::Session;

/// Shared handle to one session. Holding the lock is what serializes turns.
pub type SessionHandle = Arc<Mutex<Session>>;

type PromptFn = Box<dyn Fn() -> String + Send + Sync>;

pub struct SessionStore {
    prompt: PromptFn,
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
}

impl SessionStore {
    /// Every new session starts with this system prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        let prompt = system_prompt.into();
        Self::with_prompt_fn(move || prompt.clone())
    }

    /// Render the system prompt when each session is created, e.g. to stamp
    /// the current date.
    pub fn with_prompt_fn(prompt: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            prompt: Box::new(prompt),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get_or_create(&self, id: &SessionId) -> SessionHandle {
        if let Some(handle) = self.sessions.read().await.get(id) {
            return Arc::clone(handle);
        }

        let mut sessions = self.sessions.write().await;
        let handle = sessions.entry(id.clone()).or_insert_with(|| {
            debug!(session = %id, "new session");
            Arc::new(Mutex::new(Session::new(id.clone(), (self.prompt)())))
        });
        Arc::clone(handle)
    }

    pub async fn get(&self, id: &SessionId) -> Result<SessionHandle, SessionError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownSession(id.clone()))
    }

    pub async fn append(&self, id: &SessionId, message: Message) -> Result<(), SessionError> {
        let handle = self.get(id).await?;
        handle.lock().await.push(message);
        Ok(())
    }

    /// Snapshot of a session's history. Waits for an in-flight turn to finish.
    pub async fn history(&self, id: &SessionId) -> Result<Vec<Message>, SessionError> {
        let handle = self.get(id).await?;
        let session = handle.lock().await;
        Ok(session.messages().to_vec())
    }

    pub async fn contains(&self, id: &SessionId) -> bool {
        self.sessions.read().await.contains_key(id)
    }

    pub async fn ids(&self) -> Vec<SessionId> {
        self.sessions.read().await.keys().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
