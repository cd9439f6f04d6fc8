//! Token usage accounting for a session.

use std::collections::HashMap;

use crate::TokenUsage;

/// Cumulative usage for one session, broken down by model.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    by_model: HashMap<String, TokenUsage>,
    /// Model calls, including the ones that only requested tools.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the usage of a turn that took `calls` model calls.
    pub fn record(&mut self, model: &str, usage: &TokenUsage, calls: u64) {
        self.total.add(usage);
        self.call_count = self.call_count.saturating_add(calls);
        self.by_model.entry(model.to_string()).or_default().add(usage);
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_model(&self, model: &str) -> Option<&TokenUsage> {
        self.by_model.get(model)
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
