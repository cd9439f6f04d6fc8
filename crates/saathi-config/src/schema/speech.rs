//! Speech output configuration types.

use serde::{Deserialize, Serialize};

/// Which speech sink receives normalized replies.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpeechEngine {
    /// The macOS `say` command.
    #[default]
    Say,
    /// Print the normalized text instead of speaking it.
    Echo,
    None,
}

/// How the normalizer's lookup tables match letter case.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    /// Tables only fire on lowercase text.
    #[default]
    Exact,
    Insensitive,
}

/// What happens to triple-backtick code blocks on the speech path.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CodeBlockPolicy {
    /// Scrubbed and spoken like the surrounding prose.
    #[default]
    Speak,
    /// Removed before any other pass runs.
    Skip,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub engine: SpeechEngine,
    /// Voice name passed to `say -v`.
    pub voice: Option<String>,
    pub case_matching: CaseMatching,
    pub code_blocks: CodeBlockPolicy,
}
