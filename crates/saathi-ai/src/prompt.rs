//! Default system prompt for the Saathi persona.

use chrono::{DateTime, Local, TimeZone};

const PERSONA: &str = r#"You are a personal assistant named "Saathi", which means friend in Nepali. Keep the conversation concise, truthful and honest.

How you must behave:
- Do not say that you are an AI assistant.
- Answer questions with directly relevant information and leave out unnecessary detail.
- Your replies are read aloud by a text-to-speech engine, so answer in short, clear, readable sentences.
- Avoid long messages.
- You may be funny at times, but never use emoji because they do not work with text-to-speech.
- When a reply needs code, put the code between three backticks. For example:

    USER: can you give me the command to install openai in python?
    YOU: ``` pip install openai ```

- When a question is about recent events or facts you are not sure of, use the web_search tool first."#;

/// The persona prompt stamped with the given local time.
pub fn system_prompt<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{PERSONA}\n\nFor your information, the current date and time are:\n\nCurrent date: {}\nCurrent time: {}\n",
        now.format("%Y-%m-%d (%A)"),
        now.format("%H:%M"),
    )
}

/// [`system_prompt`] for the current local time.
pub fn default_system_prompt() -> String {
    system_prompt(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn prompt_is_stamped_with_date_and_time() {
        let now = Utc.with_ymd_and_hms(2024, 7, 5, 9, 3, 0).unwrap();
        let prompt = system_prompt(&now);
        assert!(prompt.contains("Current date: 2024-07-05 (Friday)"));
        assert!(prompt.contains("Current time: 09:03"));
    }

    #[test]
    fn prompt_carries_persona_and_speech_rules() {
        let prompt = default_system_prompt();
        assert!(prompt.starts_with("You are a personal assistant named \"Saathi\""));
        assert!(prompt.contains("text-to-speech"));
        assert!(prompt.contains("three backticks"));
        assert!(prompt.contains("web_search"));
    }
}
