use clap::Parser;

/// Saathi: a spoken assistant backed by a local Ollama model.
#[derive(Parser, Debug)]
#[command(name = "saathi", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Ollama model to use instead of the configured one.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Conversation id; reuse one to keep talking in the same session.
    #[arg(short = 's', long)]
    pub session: Option<String>,

    /// Print replies without speaking them.
    #[arg(long)]
    pub no_speech: bool,

    /// Ask a single question, print the answer, and exit.
    #[arg(long, value_name = "TEXT")]
    pub once: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
