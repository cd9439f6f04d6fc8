//! Text normalization for speech synthesis.
//!
//! Turns free-form model output into plain text a TTS engine reads well.
//! The pipeline is a fixed, ordered list of passes ([`PASSES`]); each pass
//! assumes the ones before it already ran. History always keeps the raw
//! model text. Only the speech path goes through here.

mod numbers;
mod passes;
mod tables;

#[cfg(test)]
mod tests;

pub use numbers::{cardinal, digits_to_words};
pub use saathi_config::schema::{CaseMatching, CodeBlockPolicy};

use saathi_config::schema::SpeechConfig;

/// One deterministic rewrite stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Drop characters irrelevant to speech (Markdown, code punctuation).
    StructuralScrub,
    /// "can't" -> "cannot". Runs before abbreviations so apostrophes are
    /// consumed before the symbol sweep.
    ContractionExpansion,
    /// "dr." -> "doctor", "&" -> "and".
    AbbreviationExpansion,
    /// "120" -> "one hundred and twenty".
    NumeralsToWords,
    /// "," -> "." for a stronger pause.
    PauseSubstitution,
}

/// Pipeline order. Reordering changes results.
pub const PASSES: [Pass; 5] = [
    Pass::StructuralScrub,
    Pass::ContractionExpansion,
    Pass::AbbreviationExpansion,
    Pass::NumeralsToWords,
    Pass::PauseSubstitution,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerOptions {
    pub case_matching: CaseMatching,
    pub code_blocks: CodeBlockPolicy,
}

impl NormalizerOptions {
    pub fn from_config(config: &SpeechConfig) -> Self {
        Self {
            case_matching: config.case_matching,
            code_blocks: config.code_blocks,
        }
    }
}

/// Stateless normalizer; cheap to copy and safe to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    options: NormalizerOptions,
}

impl TextNormalizer {
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> NormalizerOptions {
        self.options
    }

    /// Run every pass in [`PASSES`] order.
    pub fn normalize(&self, text: &str) -> String {
        let mut out = match self.options.code_blocks {
            CodeBlockPolicy::Skip => passes::strip_code_blocks(text),
            CodeBlockPolicy::Speak => text.to_string(),
        };
        for pass in PASSES {
            out = self.apply(pass, &out);
        }
        out
    }

    /// Run a single pass. Exposed for diagnostics and tests.
    pub fn apply(&self, pass: Pass, text: &str) -> String {
        let case_insensitive = self.options.case_matching == CaseMatching::Insensitive;
        match pass {
            Pass::StructuralScrub => passes::structural_scrub(text),
            Pass::ContractionExpansion => passes::expand_contractions(text, case_insensitive),
            Pass::AbbreviationExpansion => passes::expand_abbreviations(text, case_insensitive),
            Pass::NumeralsToWords => passes::numerals_to_words(text),
            Pass::PauseSubstitution => passes::substitute_pauses(text),
        }
    }
}

/// Normalize with default options (exact-case tables, code spoken).
pub fn normalize_for_speech(text: &str) -> String {
    TextNormalizer::default().normalize(text)
}
