//! Ollama chat client.
//!
//! Implements [`crate::ModelClient`] against a local Ollama server via
//! `POST /api/chat` with native tool calling and `stream: false`.

mod api;
mod client;
mod config;

pub use client::OllamaClient;
pub use config::OllamaConfig;
