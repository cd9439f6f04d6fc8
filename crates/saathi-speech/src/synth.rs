//! Speech output sinks.
//!
//! The assistant hands normalized text to a [`SpeechSink`]. On macOS the
//! `say` command speaks it; elsewhere the text can be echoed or dropped.

use async_trait::async_trait;
use saathi_config::schema::{SpeechConfig, SpeechEngine};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("failed to start {program}: {reason}")]
    Spawn { program: String, reason: String },
    #[error("speech engine exited with {0}")]
    Failed(String),
}

#[async_trait]
pub trait SpeechSink: Send + Sync {
    /// Engine name as written in `[speech] engine`.
    fn name(&self) -> &'static str;

    async fn speak(&self, text: &str) -> Result<(), SpeechError>;
}

/// Speaks through the macOS `say` command.
///
/// The text is passed as a single argument, never through a shell.
pub struct SayCommand {
    program: String,
    voice: Option<String>,
}

impl SayCommand {
    pub fn new(voice: Option<String>) -> Self {
        Self {
            program: "say".to_string(),
            voice,
        }
    }

    /// Use a different executable with the same argument convention.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub(crate) fn args(&self, text: &str) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(ref voice) = self.voice {
            args.push("-v".to_string());
            args.push(voice.clone());
        }
        args.push("--".to_string());
        args.push(text.to_string());
        args
    }
}

#[async_trait]
impl SpeechSink for SayCommand {
    fn name(&self) -> &'static str {
        "say"
    }

    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        debug!(program = %self.program, chars = text.chars().count(), "speaking");

        let status = tokio::process::Command::new(&self.program)
            .args(self.args(text))
            .status()
            .await
            .map_err(|e| SpeechError::Spawn {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SpeechError::Failed(status.to_string()))
        }
    }
}

/// Prints what would have been spoken.
pub struct EchoSink;

#[async_trait]
impl SpeechSink for EchoSink {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        if !text.trim().is_empty() {
            println!("(speaking) {text}");
        }
        Ok(())
    }
}

/// Discards everything.
pub struct SilentSink;

#[async_trait]
impl SpeechSink for SilentSink {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn speak(&self, _text: &str) -> Result<(), SpeechError> {
        Ok(())
    }
}

/// Build the sink selected in `[speech]`.
pub fn sink_from_config(config: &SpeechConfig) -> Box<dyn SpeechSink> {
    match config.engine {
        SpeechEngine::Say => Box::new(SayCommand::new(config.voice.clone())),
        SpeechEngine::Echo => Box::new(EchoSink),
        SpeechEngine::None => Box::new(SilentSink),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn say_args_without_voice() {
        let say = SayCommand::new(None);
        assert_eq!(say.args("hello there"), vec!["--", "hello there"]);
    }

    #[test]
    fn say_args_with_voice() {
        let say = SayCommand::new(Some("Samantha".into()));
        assert_eq!(say.args("-rf"), vec!["-v", "Samantha", "--", "-rf"]);
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let say = SayCommand::new(None).with_program("/nonexistent/saathi-say");
        let err = say.speak("hello").await.unwrap_err();
        assert!(matches!(err, SpeechError::Spawn { .. }));
    }

    #[tokio::test]
    async fn blank_text_is_not_spoken() {
        let say = SayCommand::new(None).with_program("/nonexistent/saathi-say");
        assert!(say.speak("   ").await.is_ok());
    }

    #[tokio::test]
    async fn silent_and_echo_always_succeed() {
        assert!(SilentSink.speak("anything").await.is_ok());
        assert!(EchoSink.speak("").await.is_ok());
    }

    #[test]
    fn sink_selection_follows_engine() {
        let mut config = SpeechConfig::default();
        assert_eq!(sink_from_config(&config).name(), "say");

        config.engine = SpeechEngine::Echo;
        assert_eq!(sink_from_config(&config).name(), "echo");

        config.engine = SpeechEngine::None;
        assert_eq!(sink_from_config(&config).name(), "none");
    }
}
