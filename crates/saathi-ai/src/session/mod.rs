//! Conversation sessions.
//!
//! A [`Session`] is the append-only message history of one conversation,
//! seeded with the system prompt. The [`SessionStore`] maps session ids to
//! sessions; each session sits behind its own async mutex so turns on the
//! same session run one at a time while different sessions proceed freely.

mod store;
mod types;

pub use store::{SessionHandle, SessionStore};
pub use types::Session;
