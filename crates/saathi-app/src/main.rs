mod cli;
mod repl;
mod setup;

use std::path::{Path, PathBuf};

use saathi_common::SessionId;
use saathi_config::schema::SaathiConfig;
use saathi_speech::{sink_from_config, NormalizerOptions, SilentSink, SpeechSink, TextNormalizer};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "saathi=info";

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("saathi").join(".env"));
    }

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

/// `--log-level debug` means `saathi=debug`; full directives pass through.
fn log_directive(arg: Option<&str>, config: Option<&SaathiConfig>) -> String {
    match arg {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("saathi={level}"),
        None => config
            .map(|c| c.logging.level.directive())
            .unwrap_or(DEFAULT_DIRECTIVE)
            .to_string(),
    }
}

fn init_logging(directive: &str) {
    let parsed: Result<Directive, _> = directive.parse().or_else(|_| DEFAULT_DIRECTIVE.parse());
    let filter = match parsed {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    load_dotenv();

    let args = cli::parse();

    let loaded = saathi_config::load_config(args.config.as_deref().map(Path::new));
    init_logging(&log_directive(args.log_level.as_deref(), loaded.as_ref().ok()));

    tracing::info!("Saathi v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        SaathiConfig::default()
    });
    if let Some(ref model) = args.model {
        config.model.name = model.clone();
    }
    tracing::info!(model = %config.model.name, url = %config.model.base_url, "Config loaded");
    if args.print_config {
        println!("{}", saathi_config::config_to_json(&config));
        return;
    }

    let chat = match setup::chat_facade(&config).await {
        Ok(chat) => chat,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    let normalizer = TextNormalizer::new(NormalizerOptions::from_config(&config.speech));
    let sink: Box<dyn SpeechSink> = if args.no_speech {
        Box::new(SilentSink)
    } else {
        sink_from_config(&config.speech)
    };
    let session = args.session.map(SessionId::from).unwrap_or_default();
    tracing::info!(session = %session, speech = sink.name(), "Session ready");

    let repl = repl::Repl::new(&chat, &normalizer, sink.as_ref(), session);
    match args.once {
        Some(text) => repl.turn(&text).await,
        None => {
            if let Err(e) = repl.run().await {
                tracing::error!("Input error: {e}");
            }
        }
    }
    tracing::info!("Shutdown complete");
}
