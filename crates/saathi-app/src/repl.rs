//! Line-oriented conversation loop.

use saathi_ai::ChatFacade;
use saathi_common::SessionId;
use saathi_speech::{SpeechSink, TextNormalizer};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Blank,
    Quit,
    Usage,
    Message(String),
}

impl Input {
    pub fn classify(line: &str) -> Self {
        match line.trim() {
            "" => Input::Blank,
            "/quit" | "/exit" | "quit" | "exit" => Input::Quit,
            "/usage" => Input::Usage,
            text => Input::Message(text.to_string()),
        }
    }
}

pub struct Repl<'a> {
    chat: &'a ChatFacade,
    normalizer: &'a TextNormalizer,
    sink: &'a dyn SpeechSink,
    session: SessionId,
}

impl<'a> Repl<'a> {
    pub fn new(
        chat: &'a ChatFacade,
        normalizer: &'a TextNormalizer,
        sink: &'a dyn SpeechSink,
        session: SessionId,
    ) -> Self {
        Self {
            chat,
            normalizer,
            sink,
            session,
        }
    }

    /// One turn: print the raw reply, then speak its normalized form.
    pub async fn turn(&self, text: &str) {
        let reply = self.chat.respond(&self.session, text).await;
        println!("saathi> {reply}");

        let speech = self.normalizer.normalize(&reply);
        if let Err(e) = self.sink.speak(&speech).await {
            warn!("Speech output failed: {e}");
        }
    }

    async fn print_usage(&self) {
        match self.chat.usage(&self.session).await {
            Ok(usage) => println!(
                "{} model calls, {} tokens in, {} tokens out",
                usage.call_count(),
                usage.total().input_tokens,
                usage.total().output_tokens
            ),
            Err(_) => println!("No turns yet."),
        }
    }

    /// Read stdin until EOF or a quit command.
    pub async fn run(&self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        loop {
            stdout.write_all(b"you> ").await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                println!();
                return Ok(());
            };

            match Input::classify(&line) {
                Input::Blank => continue,
                Input::Quit => return Ok(()),
                Input::Usage => self.print_usage().await,
                Input::Message(text) => self.turn(&text).await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_inputs() {
        assert_eq!(Input::classify("   "), Input::Blank);
        assert_eq!(Input::classify("/quit"), Input::Quit);
        assert_eq!(Input::classify("exit"), Input::Quit);
        assert_eq!(Input::classify("/usage"), Input::Usage);
        assert_eq!(
            Input::classify("  what's the weather?  "),
            Input::Message("what's the weather?".into())
        );
    }

    #[test]
    fn quit_words_inside_sentences_are_messages() {
        assert!(matches!(Input::classify("how do I exit vim"), Input::Message(_)));
    }
}
